//! OPTIONAL combinator - validate a value only when it is present
//!
//! Absence is never a violation. Use `required` on the outer value when a
//! `None` must be rejected.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use super::Join;
use crate::foundation::{Context, Validate, ValidationError};

/// Passes on `None`, delegates the contents of `Some` to rules over `T`.
pub struct Optional<E, T: ?Sized + 'static = E> {
    rules: Join<T>,
    _elem: PhantomData<fn(&E)>,
}

impl<E, T: ?Sized + 'static> Optional<E, T> {
    pub fn new(rules: Join<T>) -> Self {
        Self {
            rules,
            _elem: PhantomData,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        self.rules.push(validator);
        self
    }
}

impl<E, T: ?Sized + 'static> Clone for Optional<E, T> {
    fn clone(&self) -> Self {
        Self::new(self.rules.clone())
    }
}

impl<E, T: ?Sized + 'static> fmt::Debug for Optional<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optional").field("rules", &self.rules).finish()
    }
}

impl<E, T> Validate for Optional<E, T>
where
    E: Borrow<T>,
    T: ?Sized + 'static,
{
    type Input = Option<E>;

    fn validate(&self, ctx: &Context, input: &Option<E>) -> Result<(), ValidationError> {
        match input {
            Some(value) => self.rules.check(ctx, value.borrow()),
            None => Ok(()),
        }
    }
}

/// Creates an `Optional` around `validator`.
pub fn optional<E, V>(validator: V) -> Optional<E, V::Input>
where
    E: Borrow<V::Input>,
    V: Validate + Send + Sync + 'static,
    V::Input: 'static,
{
    Optional::new(Join::new().with(validator))
}

/// Alias of [`optional`] for boxed or shared references modelled as `Option`.
pub fn pointer<E, V>(validator: V) -> Optional<E, V::Input>
where
    E: Borrow<V::Input>,
    V: Validate + Send + Sync + 'static,
    V::Input: 'static,
{
    optional(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::min_length;

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = u8;

        fn validate(&self, _ctx: &Context, _input: &u8) -> Result<(), ValidationError> {
            Err(ValidationError::custom("rejected"))
        }
    }

    #[test]
    fn test_none_passes() {
        assert!(optional(AlwaysFails).validate(&Context::new(), &None::<u8>).is_ok());
        assert!(pointer(AlwaysFails).validate(&Context::new(), &None::<u8>).is_ok());
    }

    #[test]
    fn test_some_delegates() {
        let err = optional(AlwaysFails)
            .validate(&Context::new(), &Some(1u8))
            .unwrap_err();
        assert!(err.is_leaf());
        assert_eq!(err.to_string(), "rejected");
    }

    #[test]
    fn test_boxed_contents() {
        let v = pointer(min_length(3));
        let ctx = Context::new();
        assert!(v.validate(&ctx, &Some(Box::<str>::from("abc"))).is_ok());
        assert!(v.validate(&ctx, &None::<Box<str>>).is_ok());
        assert!(v.validate(&ctx, &Some(Box::<str>::from("ab"))).is_err());
    }
}
