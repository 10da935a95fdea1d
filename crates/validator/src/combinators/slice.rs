//! SLICE combinator - validate every element of a sequence

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use super::Join;
use super::error::SliceError;
use crate::foundation::{Context, ErrorAggregate, Validate, ValidationError};

/// Applies rules over `T` to each element of `[E]`.
///
/// Failing indices are reported in ascending order. An empty slice passes.
///
/// # Examples
///
/// ```rust,ignore
/// let v = each(max_length(8));
/// let err = v.validate(&ctx, &["short".to_owned(), "much too long".to_owned()]).unwrap_err();
/// ```
pub struct Slice<E, T: ?Sized + 'static = E> {
    rules: Join<T>,
    _elem: PhantomData<fn(&E)>,
}

impl<E, T: ?Sized + 'static> Slice<E, T> {
    pub fn new(rules: Join<T>) -> Self {
        Self {
            rules,
            _elem: PhantomData,
        }
    }

    /// Adds another element rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        self.rules.push(validator);
        self
    }
}

impl<E, T: ?Sized + 'static> Clone for Slice<E, T> {
    fn clone(&self) -> Self {
        Self::new(self.rules.clone())
    }
}

impl<E, T: ?Sized + 'static> fmt::Debug for Slice<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice").field("rules", &self.rules).finish()
    }
}

impl<E, T> Validate for Slice<E, T>
where
    E: Borrow<T>,
    T: ?Sized + 'static,
{
    type Input = [E];

    fn validate(&self, ctx: &Context, input: &[E]) -> Result<(), ValidationError> {
        let mut errors = ErrorAggregate::new();
        for (i, elem) in input.iter().enumerate() {
            if let Err(e) = self.rules.check(ctx, elem.borrow()) {
                errors.insert(i, e);
            }
        }
        errors.into_result(|errors| ValidationError::Slice(SliceError::new(errors, input.len())))
    }
}

/// Creates a `Slice` applying `validator` to each element.
pub fn each<E, V>(validator: V) -> Slice<E, V::Input>
where
    E: Borrow<V::Input>,
    V: Validate + Send + Sync + 'static,
    V::Input: 'static,
{
    Slice::new(Join::new().with(validator))
}
