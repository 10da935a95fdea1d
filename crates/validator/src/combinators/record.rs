//! RECORD combinator - validate the bound fields of a struct
//!
//! # Examples
//!
//! ```rust,ignore
//! use sieve_validator::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Login {
//!     name: String,
//!     password: String,
//! }
//!
//! let v = record(|s: &mut FieldBinder<'_, Login>| {
//!     s.add("name", |l| &l.name, length(5, 20));
//!     s.add("password", |l| &l.password, min_length(8));
//! });
//! ```

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use super::error::{retag, FieldViolation, RecordError};
use super::field::{BoundField, FieldBinder, FieldFailure};
use crate::foundation::{Context, ErrorAggregate, Validate, ValidationError, WithFormat};
use crate::message::{formats, Format};

/// Validates the fields bound through a [`FieldBinder`].
///
/// Fields are checked and reported in binding order; each failing field
/// contributes one entry keyed by its label. Every leaf message of a failing
/// field is prefixed through the field format, `{0}: {1}` by default.
pub struct Record<T: 'static> {
    fields: Arc<[BoundField<T>]>,
    format: Format,
}

impl<T: Default + 'static> Record<T> {
    /// Builds the bindings against `T::default()`.
    pub fn new(build: impl FnOnce(&mut FieldBinder<'_, T>)) -> Self {
        Self::from_instance(&T::default(), build)
    }
}

impl<T: 'static> Record<T> {
    /// Builds the bindings against `base`, for types without `Default`.
    pub fn from_instance(base: &T, build: impl FnOnce(&mut FieldBinder<'_, T>)) -> Self {
        let mut binder = FieldBinder::new(base);
        build(&mut binder);
        let fields = binder.finish();
        tracing::debug!(record = type_name::<T>(), fields = fields.len(), "record validator built");
        Self {
            fields: fields.into(),
            format: formats::FIELD,
        }
    }

    /// Field labels in binding order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_ref())
    }
}

impl<T: 'static> Clone for Record<T> {
    fn clone(&self) -> Self {
        Self {
            fields: Arc::clone(&self.fields),
            format: self.format.clone(),
        }
    }
}

impl<T: 'static> fmt::Debug for Record<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("type", &type_name::<T>())
            .field("fields", &self.fields)
            .field("format", &self.format)
            .finish()
    }
}

impl<T: 'static> Validate for Record<T> {
    type Input = T;

    fn validate(&self, ctx: &Context, input: &T) -> Result<(), ValidationError> {
        let mut errors = ErrorAggregate::new();
        for field in self.fields.iter() {
            let Err(FieldFailure { error, value }) = field.check(ctx, input) else {
                continue;
            };
            let tagged = retag(error, |leaf| {
                let payload = FieldViolation {
                    name: field.name.clone(),
                    value: value.clone(),
                    error: leaf,
                };
                ValidationError::violation(ctx, payload, &self.format)
            });
            errors.insert(field.name.clone(), tagged);
        }
        errors.into_result(|errors| ValidationError::Record(RecordError::new(errors)))
    }
}

impl<T: 'static> WithFormat for Record<T> {
    fn format(&self) -> &Format {
        &self.format
    }

    fn replace_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}

/// Creates a `Record` whose bindings are resolved against `T::default()`.
pub fn record<T: Default + 'static>(build: impl FnOnce(&mut FieldBinder<'_, T>)) -> Record<T> {
    Record::new(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::from_fn;
    use crate::message::by_name;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct Server {
        host: String,
        port: u16,
    }

    fn not_empty() -> impl Validate<Input = str> + Send + Sync + 'static {
        from_fn(|_: &Context, s: &str| {
            if s.is_empty() {
                Err(ValidationError::custom("is empty"))
            } else {
                Ok(())
            }
        })
    }

    fn privileged() -> impl Validate<Input = u16> + Send + Sync + 'static {
        from_fn(|_: &Context, p: &u16| {
            if *p < 1024 {
                Err(ValidationError::custom("is privileged"))
            } else {
                Ok(())
            }
        })
    }

    fn server() -> Record<Server> {
        record(|s: &mut FieldBinder<'_, Server>| {
            s.add("host", |v: &Server| &v.host, not_empty());
            s.add("port", |v: &Server| &v.port, privileged());
        })
    }

    #[test]
    fn test_no_fields_always_passes() {
        let v = record(|_: &mut FieldBinder<'_, Server>| {});
        assert!(v.validate(&Context::new(), &Server::default()).is_ok());
    }

    #[test]
    fn test_fields_are_prefixed_with_name() {
        let err = server()
            .validate(&Context::new(), &Server::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "host: is empty\nport: is privileged");

        let ValidationError::Record(rec) = &err else {
            panic!("expected record error, got {err:?}");
        };
        assert_eq!(rec.errors().keys().map(AsRef::as_ref).collect::<Vec<&str>>(), vec!["host", "port"]);
        assert!(rec.field("port").is_some());
    }

    #[test]
    fn test_payload_carries_field_value() {
        let input = Server {
            host: "localhost".into(),
            port: 80,
        };
        let err = server().validate(&Context::new(), &input).unwrap_err();
        let leaf = err.flatten()[0];
        let payload = leaf.payload::<FieldViolation>().unwrap();
        assert_eq!(payload.name, "port");
        assert_eq!(payload.value.to_string(), "80");
        assert_eq!(payload.error.message(), "is privileged");
    }

    #[test]
    fn test_with_format_leaves_base_untouched() {
        let base = server();
        let custom = base.with_format("[{0}] {1}", [by_name("name"), by_name("error")]);
        let input = Server {
            host: "db".into(),
            port: 1,
        };
        assert_eq!(custom.validate(&Context::new(), &input).unwrap_err().to_string(), "[port] is privileged");
        assert_eq!(base.validate(&Context::new(), &input).unwrap_err().to_string(), "port: is privileged");
    }

    #[test]
    fn test_nested_record_prefixes_once_per_level() {
        #[derive(Debug, Default)]
        struct Cluster {
            primary: Server,
        }

        let v = record(|s: &mut FieldBinder<'_, Cluster>| {
            s.add("primary", |c: &Cluster| &c.primary, server());
        });
        let err = v.validate(&Context::new(), &Cluster::default()).unwrap_err();
        assert_eq!(
            err.messages(),
            vec!["primary: host: is empty", "primary: port: is privileged"]
        );
    }
}
