//! Predicate validator
//!
//! Wraps a `Fn(&T) -> bool`. The default message is generic; cross-field
//! rules usually replace it:
//!
//! ```rust,ignore
//! let same = custom(|r: &Signup| r.password == r.confirmation)
//!     .with_format("passwords does not match", []);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Context, Validate, ValidationError, WithFormat};
use crate::message::{formats, ArgValue, Format};

crate::payload! {
    /// Payload of [`Custom`]. The value is captured through `Debug`.
    #[derive(Debug, Clone, PartialEq)]
    pub struct CustomViolation {
        "value" => pub value: ArgValue,
    }
}

/// Validates with a user predicate.
pub struct Custom<T: ?Sized, F> {
    predicate: F,
    format: Format,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F: Clone> Clone for Custom<T, F> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            format: self.format.clone(),
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for Custom<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("predicate", &"<function>")
            .field("format", &self.format)
            .finish()
    }
}

impl<T, F> Validate for Custom<T, F>
where
    T: ?Sized + fmt::Debug,
    F: Fn(&T) -> bool,
{
    type Input = T;

    fn validate(&self, ctx: &Context, input: &T) -> Result<(), ValidationError> {
        if (self.predicate)(input) {
            Ok(())
        } else {
            let payload = CustomViolation {
                value: ArgValue::debug(input),
            };
            Err(ValidationError::violation(ctx, payload, &self.format))
        }
    }
}

impl<T: ?Sized, F: Clone> WithFormat for Custom<T, F> {
    fn format(&self) -> &Format {
        &self.format
    }

    fn replace_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}

/// Creates a `Custom` validator from `predicate`.
pub fn custom<T, F>(predicate: F) -> Custom<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    Custom {
        predicate,
        format: formats::CUSTOM,
        _input: PhantomData,
    }
}
