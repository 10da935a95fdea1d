//! JSON ingestion boundary.
//!
//! Decodes untyped JSON into a concrete type and validates it in one step.
//! A value of the wrong shape is reported as [`IngestError::Decode`] instead
//! of reaching the validator.
//!
//! # Examples
//!
//! ```
//! use serde::Deserialize;
//! use serde_json::json;
//! use sieve_validator::combinators::{FieldBinder, record};
//! use sieve_validator::foundation::Context;
//! use sieve_validator::json::{IngestError, ingest};
//! use sieve_validator::validators::min_length;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Login {
//!     user: String,
//! }
//!
//! let v = record(|s: &mut FieldBinder<'_, Login>| {
//!     s.add("user", |l: &Login| &l.user, min_length(3));
//! });
//!
//! let login: Login = ingest(&v, &Context::new(), json!({"user": "alice"})).unwrap();
//! assert_eq!(login.user, "alice");
//!
//! let err = ingest::<Login, _>(&v, &Context::new(), json!({"user": 7})).unwrap_err();
//! assert!(matches!(err, IngestError::Decode { .. }));
//! ```

use std::borrow::Borrow;

use serde::de::DeserializeOwned;

use crate::foundation::{Context, Validate, ValidationError};

/// Failure at the JSON boundary.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The JSON does not describe a `type_name`.
    #[error("cannot decode `{type_name}`: {source}")]
    Decode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The decoded value failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl IngestError {
    /// The validation failure, if decoding succeeded.
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Decode { .. } => None,
        }
    }
}

/// Decodes `value` as `T` and validates it.
///
/// `T` only has to borrow as the validator input, so a `Vec<U>` can be
/// checked by a validator over `[U]`.
pub fn ingest<T, V>(validator: &V, ctx: &Context, value: serde_json::Value) -> Result<T, IngestError>
where
    T: DeserializeOwned + Borrow<V::Input>,
    V: Validate + ?Sized,
{
    let decoded: T = serde_json::from_value(value).map_err(decode_error::<T>)?;
    validator.validate(ctx, decoded.borrow())?;
    Ok(decoded)
}

/// Parses `json` as `T` and validates it.
pub fn ingest_str<T, V>(validator: &V, ctx: &Context, json: &str) -> Result<T, IngestError>
where
    T: DeserializeOwned + Borrow<V::Input>,
    V: Validate + ?Sized,
{
    let decoded: T = serde_json::from_str(json).map_err(decode_error::<T>)?;
    validator.validate(ctx, decoded.borrow())?;
    Ok(decoded)
}

fn decode_error<T>(source: serde_json::Error) -> IngestError {
    let type_name = std::any::type_name::<T>();
    tracing::debug!(type_name, error = %source, "json input does not decode");
    IngestError::Decode { type_name, source }
}
