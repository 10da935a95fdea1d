//! Core traits for the validation system
//!
//! This module defines the contract every rule implements and the extension
//! methods that compose rules into larger validators.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::combinators::{Join, Optional, Slice};
use crate::foundation::{Context, ValidationError};
use crate::message::{Arg, Format};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait that all validators implement.
///
/// A validator reads `input` and either accepts it or returns a rendered
/// [`ValidationError`]. Messages are rendered through the printer carried by
/// `ctx`. Validators hold no mutable state and can be shared across threads.
///
/// # Examples
///
/// ```rust,ignore
/// use sieve_validator::foundation::{Context, Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, _ctx: &Context, input: &str) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::custom("must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, ctx: &Context, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, ctx: &Context, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(ctx, input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, ctx: &Context, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(ctx, input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, ctx: &Context, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(ctx, input)
    }
}

// ============================================================================
// MESSAGE CUSTOMIZATION
// ============================================================================

/// Validators whose failure message can be replaced.
///
/// [`with_format`](Self::with_format) returns a modified copy; the receiver
/// keeps its own format, so one base rule can be specialised per call site.
pub trait WithFormat: Clone {
    /// The format used when the rule fails.
    fn format(&self) -> &Format;

    /// Consumes the rule and installs `format`.
    #[must_use]
    fn replace_format(self, format: Format) -> Self;

    /// Returns a copy that renders with template `key` and selectors `args`.
    ///
    /// ```rust,ignore
    /// let v = length(5, 20).with_format("must be of length {0} to {1}", [by_name("min"), by_name("max")]);
    /// ```
    #[must_use]
    fn with_format(
        &self,
        key: impl Into<Cow<'static, str>>,
        args: impl IntoIterator<Item = Arg>,
    ) -> Self {
        self.clone().replace_format(Format::new(key, args))
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// `Validate`.
pub trait ValidateExt: Validate + Sized {
    /// Runs both validators and reports every failure.
    ///
    /// ```rust,ignore
    /// let v = min_length(3).and(max_length(10));
    /// assert!(v.validate(&Context::new(), "hello").is_ok());
    /// ```
    fn and<V>(self, other: V) -> Join<Self::Input>
    where
        Self: Send + Sync + 'static,
        Self::Input: 'static,
        V: Validate<Input = Self::Input> + Send + Sync + 'static,
    {
        Join::new().with(self).with(other)
    }

    /// Applies the validator to every element of a slice.
    ///
    /// Elements only have to borrow as `Self::Input`, so a `str` rule
    /// checks a `[String]`.
    fn each<E>(self) -> Slice<E, Self::Input>
    where
        Self: Send + Sync + 'static,
        Self::Input: 'static,
        E: Borrow<Self::Input>,
    {
        Slice::new(Join::new().with(self))
    }

    /// Accepts `None` and validates the contents of `Some`.
    fn optional<E>(self) -> Optional<E, Self::Input>
    where
        Self: Send + Sync + 'static,
        Self::Input: 'static,
        E: Borrow<Self::Input>,
    {
        Optional::new(Join::new().with(self))
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// CLOSURE VALIDATORS
// ============================================================================

/// A validator backed by a closure that returns its own error.
pub struct FromFn<T: ?Sized, F> {
    f: F,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F: Clone> Clone for FromFn<T, F> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for FromFn<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<T, F> Validate for FromFn<T, F>
where
    T: ?Sized,
    F: Fn(&Context, &T) -> Result<(), ValidationError>,
{
    type Input = T;

    fn validate(&self, ctx: &Context, input: &T) -> Result<(), ValidationError> {
        (self.f)(ctx, input)
    }
}

/// Wraps `f` as a validator.
pub fn from_fn<T, F>(f: F) -> FromFn<T, F>
where
    T: ?Sized,
    F: Fn(&Context, &T) -> Result<(), ValidationError>,
{
    FromFn {
        f,
        _input: PhantomData,
    }
}
