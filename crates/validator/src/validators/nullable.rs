//! Zero-value validator
//!
//! A value is "zero" when it equals `T::default()`: the empty string, `0`,
//! `false`, an empty `Vec`, `None`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use sieve_validator::prelude::*;
//!
//! let validator = required::<String>();
//! assert!(validator.validate(&Context::new(), &"hello".to_string()).is_ok());
//! assert!(validator.validate(&Context::new(), &String::new()).is_err());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Context, Validate, ValidationError, WithFormat};
use crate::message::{formats, ArgValue, Format};

crate::payload! {
    /// Payload of [`Required`]. The value is captured with [`ArgValue::capture`].
    #[derive(Debug, Clone, PartialEq)]
    pub struct RequiredViolation {
        "value" => pub value: ArgValue,
    }
}

/// Rejects the zero value of `T`.
pub struct Required<T> {
    format: Format,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Required<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: formats::REQUIRED,
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Required<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Required<T> {
    fn clone(&self) -> Self {
        Self {
            format: self.format.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Required<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Required")
            .field("format", &self.format)
            .finish()
    }
}

impl<T> Validate for Required<T>
where
    T: Default + PartialEq + fmt::Debug + 'static,
{
    type Input = T;

    fn validate(&self, ctx: &Context, input: &T) -> Result<(), ValidationError> {
        if *input != T::default() {
            return Ok(());
        }
        let payload = RequiredViolation {
            value: ArgValue::capture(input),
        };
        Err(ValidationError::violation(ctx, payload, &self.format))
    }
}

impl<T> WithFormat for Required<T> {
    fn format(&self) -> &Format {
        &self.format
    }

    fn replace_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}

/// Creates a `Required` validator.
#[must_use]
pub fn required<T>() -> Required<T> {
    Required::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("a", true)]
    fn test_required_string(#[case] input: &str, #[case] ok: bool) {
        let v = required::<String>();
        assert_eq!(v.validate(&Context::new(), &input.to_owned()).is_ok(), ok);
    }

    #[test]
    fn test_required_numbers_and_options() {
        let ctx = Context::new();
        assert!(required::<i32>().validate(&ctx, &-1).is_ok());
        assert!(required::<i32>().validate(&ctx, &0).is_err());
        assert!(required::<Option<u8>>().validate(&ctx, &None).is_err());
        assert!(required::<Option<u8>>().validate(&ctx, &Some(0)).is_ok());
    }

    #[test]
    fn test_required_message() {
        let err = required::<String>()
            .validate(&Context::new(), &String::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot be the zero value");
    }
}
