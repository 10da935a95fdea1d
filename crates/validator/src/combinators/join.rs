//! JOIN combinator - run every validator and keep every failure
//!
//! # Examples
//!
//! ```rust,ignore
//! use sieve_validator::prelude::*;
//!
//! let v = join![length(5, 20), pattern_str("^[a-z0-9]*$")];
//! let err = v.validate(&Context::new(), ".adm").unwrap_err();
//! assert_eq!(err.flatten().len(), 2);
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::error::JoinError;
use crate::foundation::{Context, Validate, ValidationError};

type Shared<T> = Arc<dyn Validate<Input = T> + Send + Sync>;

/// Runs N validators of the same input against one value.
///
/// Children are evaluated in order and never short-circuit. Adding a `Join`
/// to a `Join` splices its children in, so nesting stays one level deep.
pub struct Join<T: ?Sized + 'static> {
    validators: Vec<Shared<T>>,
}

impl<T: ?Sized + 'static> Join<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Appends `validator`, absorbing it if it is itself a `Join`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        self.push(validator);
        self
    }

    pub fn push<V>(&mut self, validator: V)
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        if let Some(join) = (&validator as &dyn Any).downcast_ref::<Self>() {
            self.validators.extend(join.validators.iter().cloned());
        } else {
            self.validators.push(Arc::new(validator));
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Runs every child and returns the failures in child order.
    pub fn collect(&self, ctx: &Context, input: &T) -> Vec<ValidationError> {
        self.validators
            .iter()
            .filter_map(|v| v.validate(ctx, input).err())
            .collect()
    }

    /// Like [`collect`](Self::collect), collapsing a single failure to itself.
    pub(crate) fn check(&self, ctx: &Context, input: &T) -> Result<(), ValidationError> {
        let errors = self.collect(ctx, input);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(JoinError::collapse(errors))
        }
    }
}

impl<T: ?Sized + 'static> Default for Join<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> Clone for Join<T> {
    fn clone(&self) -> Self {
        Self {
            validators: self.validators.clone(),
        }
    }
}

impl<T: ?Sized + 'static> fmt::Debug for Join<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Join")
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl<T: ?Sized + 'static> Validate for Join<T> {
    type Input = T;

    fn validate(&self, ctx: &Context, input: &T) -> Result<(), ValidationError> {
        let errors = self.collect(ctx, input);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Join(JoinError::new(errors)))
        }
    }
}

impl<T, V> Extend<V> for Join<T>
where
    T: ?Sized + 'static,
    V: Validate<Input = T> + Send + Sync + 'static,
{
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl<T, V> FromIterator<V> for Join<T>
where
    T: ?Sized + 'static,
    V: Validate<Input = T> + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut join = Self::new();
        join.extend(iter);
        join
    }
}

/// Creates a `Join` from a list of validators.
pub fn join<T, V>(validators: impl IntoIterator<Item = V>) -> Join<T>
where
    T: ?Sized + 'static,
    V: Validate<Input = T> + Send + Sync + 'static,
{
    validators.into_iter().collect()
}
