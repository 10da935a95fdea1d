//! Built-in leaf rules
//!
//! Each rule renders through its default format, which the builtin catalog
//! translates, and accepts a replacement through
//! [`WithFormat::with_format`](crate::foundation::WithFormat::with_format).
//!
//! # Examples
//!
//! ```rust,ignore
//! use sieve_validator::prelude::*;
//!
//! let username = join![length(5, 20), pattern_str("^[a-z0-9]+$")];
//! let age = in_range(18, 100);
//! let role = one_of(vec!["admin".to_owned(), "user".to_owned()]);
//! ```

pub mod custom;
pub mod length;
pub mod nullable;
pub mod pattern;
pub mod range;
pub mod set;

pub use custom::{Custom, CustomViolation, custom};
pub use length::{Length, LengthViolation, MaxLength, MinLength, length, max_length, min_length};
pub use nullable::{Required, RequiredViolation, required};
pub use pattern::{Pattern, PatternViolation, pattern, pattern_str, try_pattern_str};
pub use range::{InRange, Max, Min, RangeViolation, in_range, max, min};
pub use set::{OneOf, OneOfViolation, one_of};
