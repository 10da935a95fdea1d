//! Per-call validation context.
//!
//! A [`Context`] travels with every [`Validate::validate`](super::Validate::validate)
//! call. It carries the message printer the rules render through and an
//! open-ended bag of typed values for user validators.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::message::{CatalogPrinter, Printer};

static DEFAULT_PRINTER: LazyLock<CatalogPrinter> = LazyLock::new(CatalogPrinter::english);

/// Context threaded through a validation run.
///
/// # Examples
///
/// ```rust,ignore
/// use sieve_validator::prelude::*;
///
/// let printer = CatalogPrinter::new(Catalog::builtin(), Language::JAPANESE);
/// let ctx = Context::new().with_printer(printer);
/// let err = required::<String>().validate(&ctx, &String::new()).unwrap_err();
/// assert_eq!(err.to_string(), "必須です");
/// ```
#[derive(Clone, Default)]
pub struct Context {
    printer: Option<Arc<dyn Printer>>,
    data: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl Context {
    /// A context with no printer override and no data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `printer` for every message rendered under this context.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_printer<P: Printer + 'static>(self, printer: P) -> Self {
        self.with_shared_printer(Arc::new(printer))
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_shared_printer(mut self, printer: Arc<dyn Printer>) -> Self {
        self.printer = Some(printer);
        self
    }

    /// The installed printer, or the English catalog printer.
    #[must_use]
    pub fn printer(&self) -> &dyn Printer {
        match &self.printer {
            Some(printer) => printer.as_ref(),
            None => &*DEFAULT_PRINTER,
        }
    }

    #[must_use]
    pub fn has_printer(&self) -> bool {
        self.printer.is_some()
    }

    /// Stores a typed value under `key`, replacing any previous one.
    pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.data.insert(key.into(), Arc::new(value));
    }

    /// Chaining form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value under `key` if it has type `T`.
    #[must_use]
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.data.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("printer", &self.printer)
            .field("data", &self.data.keys().collect::<Vec<_>>())
            .finish()
    }
}
