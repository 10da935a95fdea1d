//! # sieve-validator
//!
//! A composable validation engine with aggregated, localizable failure reports.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sieve_validator::prelude::*;
//!
//! #[derive(Default)]
//! struct Signup {
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! let signup = record(|s: &mut FieldBinder<'_, Signup>| {
//!     s.add("name", |r: &Signup| &r.name, join![min_length(1), length(5, 20)]);
//!     s.add("tags", |r: &Signup| &r.tags, each(max_length(8)));
//! });
//!
//! let err = signup.validate(&Context::new(), &Signup::default()).unwrap_err();
//! for leaf in err.flatten() {
//!     println!("{leaf}");
//! }
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) contract, the error
//!   tree and the per-call [`Context`](foundation::Context)
//! - [`combinators`]: join, slice, map, optional and record validators
//! - [`validators`]: built-in leaf rules
//! - [`message`]: formats, printers and the locale catalog
//! - [`json`]: decode-then-validate at a JSON boundary
//!
//! Leaf rules are declared with [`rule!`] and their payloads with [`payload!`].

// ValidationError is returned by every validator; boxing it would add an
// allocation to each failing call.
#![allow(clippy::result_large_err)]
// Trait objects behind Arc for shared field and join children.
#![allow(clippy::type_complexity)]

mod macros;

pub mod combinators;
pub mod foundation;
pub mod json;
pub mod message;
pub mod prelude;
pub mod validators;
