//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`WithFormat`]
//! - **Errors**: [`ValidationError`], [`Violation`], [`ErrorAggregate`]
//! - **Context**: [`Context`], carrying the printer and host data of one call tree
//!
//! # Examples
//!
//! ```rust,ignore
//! use sieve_validator::prelude::*;
//!
//! let ctx = Context::new();
//! let v = min_length(5).and(max_length(20));
//! assert!(v.validate(&ctx, "hello").is_ok());
//! assert!(v.validate(&ctx, "hi").is_err());
//! ```

pub mod aggregate;
pub mod context;
pub mod error;
pub mod traits;

pub use aggregate::ErrorAggregate;
pub use context::Context;
pub use error::{ValidationError, Violation};
pub use traits::{FromFn, Validate, ValidateExt, WithFormat, from_fn};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
