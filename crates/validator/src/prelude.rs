//! Prelude module for convenient imports.
//!
//! Provides a single `use sieve_validator::prelude::*;` import that brings
//! in the traits, error types, leaf rules and combinators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use sieve_validator::prelude::*;
//!
//! let username = length(5, 20).and(pattern_str("^[a-z0-9]+$"));
//! let age = in_range(18, 100);
//! let tags = each(max_length(16));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, context
// ============================================================================

pub use crate::foundation::{
    Context, ErrorAggregate, Validate, ValidateExt, ValidationError, ValidationResult, Violation,
    WithFormat, from_fn,
};

// ============================================================================
// MESSAGES: Formats, printers, catalogs
// ============================================================================

pub use crate::message::{
    Arg, ArgValue, Catalog, CatalogPrinter, Format, Language, Payload, PlainPrinter, Printer,
    ToArg, by_name,
};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

pub use crate::validators::{
    custom, in_range, length, max, max_length, min, min_length, one_of, pattern, pattern_str,
    required,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    FieldBinder, Join, Map, Optional, Record, Slice, each, join, map, optional, pointer, record,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{join, payload, rule};
