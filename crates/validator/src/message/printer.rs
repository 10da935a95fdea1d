//! Printers turn a message key and its resolved arguments into text.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use super::args::ArgValue;
use super::catalog::{Catalog, Language};

/// Renders a message key with positional arguments.
///
/// A printer is installed on a [`Context`](crate::foundation::Context); the
/// rules fall back to [`CatalogPrinter::english`] when none is set.
pub trait Printer: Send + Sync + fmt::Debug {
    fn print(&self, key: &str, args: &[ArgValue]) -> String;
}

impl<P: Printer + ?Sized> Printer for Arc<P> {
    fn print(&self, key: &str, args: &[ArgValue]) -> String {
        (**self).print(key, args)
    }
}

impl<P: Printer + ?Sized> Printer for &P {
    fn print(&self, key: &str, args: &[ArgValue]) -> String {
        (**self).print(key, args)
    }
}

// ============================================================================
// TEMPLATE SUBSTITUTION
// ============================================================================

/// Substitutes `{0}`, `{1}`, ... in `template` with `args`.
///
/// A bare `{}` takes the next positional argument. `{{` and `}}` escape
/// braces. A placeholder whose slot has no argument is left in place.
#[must_use]
pub fn substitute(template: &str, args: &[ArgValue]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut next = 0usize;
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let slot = &tail[1..close];
        let index = if slot.is_empty() {
            let index = next;
            next += 1;
            Some(index)
        } else {
            slot.parse::<usize>().ok()
        };

        match index.and_then(|i| args.get(i)) {
            Some(value) => {
                let _ = write!(out, "{value}");
            }
            None => {
                tracing::warn!(template, slot, "message template has no argument for slot");
                out.push_str(&tail[..=close]);
            }
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

// ============================================================================
// PRINTERS
// ============================================================================

/// Uses the key itself as the template.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPrinter;

impl Printer for PlainPrinter {
    fn print(&self, key: &str, args: &[ArgValue]) -> String {
        substitute(key, args)
    }
}

/// Looks the key up in a [`Catalog`] for one language before substituting.
#[derive(Debug, Clone)]
pub struct CatalogPrinter {
    catalog: Arc<Catalog>,
    language: Language,
}

impl CatalogPrinter {
    pub fn new(catalog: impl Into<Arc<Catalog>>, language: Language) -> Self {
        Self {
            catalog: catalog.into(),
            language,
        }
    }

    /// The printer used when a context has none installed.
    #[must_use]
    pub fn english() -> Self {
        Self::new(Catalog::builtin(), Language::ENGLISH)
    }

    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Printer for CatalogPrinter {
    fn print(&self, key: &str, args: &[ArgValue]) -> String {
        let template = self.catalog.lookup(&self.language, key);
        substitute(&template, args)
    }
}
