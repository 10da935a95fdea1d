//! Field binding for record validators.
//!
//! A [`FieldBinder`] associates a rule set with one member of a record type.
//! The member is named by an accessor closure such as `|u| &u.name`; the
//! binder applies it once to a base instance and identifies the member by the
//! offset, size and type of the returned reference. The label passed with the
//! binding is only used in messages.

use std::any::{TypeId, type_name};
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::ptr;
use std::sync::Arc;

use crate::foundation::{Context, Validate, ValidationError};
use crate::message::ArgValue;

// ============================================================================
// FIELD IDENTITY
// ============================================================================

/// Position of a member inside its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey {
    offset: usize,
    size: usize,
    type_id: TypeId,
}

impl FieldKey {
    /// Locates `field` inside `base`.
    ///
    /// # Panics
    ///
    /// Panics when `field` does not lie within `base`.
    fn resolve<T, U: 'static>(base: &T, field: &U, name: &str) -> Self {
        let start = ptr::from_ref(base).addr();
        let addr = ptr::from_ref(field).addr();
        let size = size_of::<U>();

        let offset = addr
            .checked_sub(start)
            .filter(|offset| offset + size <= size_of::<T>());
        let Some(offset) = offset else {
            panic!(
                "accessor for field `{name}` does not point into `{}`",
                type_name::<T>()
            );
        };

        Self {
            offset,
            size,
            type_id: TypeId::of::<U>(),
        }
    }

    /// Byte offset from the start of the record.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

// ============================================================================
// BOUND FIELD
// ============================================================================

pub(crate) struct FieldFailure {
    pub(crate) error: ValidationError,
    pub(crate) value: ArgValue,
}

type Check<T> = dyn Fn(&Context, &T) -> Result<(), FieldFailure> + Send + Sync;

/// One binding: label, identity and the rules applied to the member.
pub(crate) struct BoundField<T> {
    pub(crate) name: Cow<'static, str>,
    pub(crate) key: FieldKey,
    check: Arc<Check<T>>,
}

impl<T> BoundField<T> {
    pub(crate) fn check(&self, ctx: &Context, record: &T) -> Result<(), FieldFailure> {
        (self.check)(ctx, record)
    }
}

impl<T> Clone for BoundField<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            key: self.key,
            check: Arc::clone(&self.check),
        }
    }
}

impl<T> fmt::Debug for BoundField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundField")
            .field("name", &self.name)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BINDER
// ============================================================================

/// Collects field bindings while a [`Record`](super::Record) is built.
pub struct FieldBinder<'a, T> {
    base: &'a T,
    fields: Vec<BoundField<T>>,
}

impl<'a, T: 'static> FieldBinder<'a, T> {
    pub(crate) fn new(base: &'a T) -> Self {
        Self {
            base,
            fields: Vec::new(),
        }
    }

    /// The instance accessors are resolved against.
    #[must_use]
    pub fn base(&self) -> &'a T {
        self.base
    }

    /// Binds `validator` to the member returned by `accessor`.
    ///
    /// # Panics
    ///
    /// Panics if the accessor does not return a member of the base instance,
    /// if the member is already bound, or if `name` is already used.
    ///
    /// Zero-sized members share their address with their neighbours, so
    /// they are told apart by `name` only and may be bound more than once.
    pub fn add<U, V, F>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        accessor: F,
        validator: V,
    ) -> &mut Self
    where
        F: Fn(&T) -> &U + Send + Sync + 'static,
        U: Borrow<V::Input> + fmt::Debug + 'static,
        V: Validate + Send + Sync + 'static,
    {
        let name = name.into();
        let key = FieldKey::resolve(self.base, accessor(self.base), &name);

        if key.size != 0
            && let Some(bound) = self.fields.iter().find(|f| f.key == key)
        {
            panic!(
                "field `{name}` of `{}` is already bound as `{}`",
                type_name::<T>(),
                bound.name
            );
        }
        assert!(
            !self.fields.iter().any(|f| f.name == name),
            "field name `{name}` is already used in `{}`",
            type_name::<T>()
        );

        tracing::debug!(
            record = type_name::<T>(),
            field = %name,
            offset = key.offset,
            "bound record field"
        );

        let check = move |ctx: &Context, record: &T| {
            let value = accessor(record);
            validator
                .validate(ctx, <U as Borrow<V::Input>>::borrow(value))
                .map_err(|error| FieldFailure {
                    error,
                    value: ArgValue::capture(value),
                })
        };

        self.fields.push(BoundField {
            name,
            key,
            check: Arc::new(check),
        });
        self
    }

    /// Number of bindings so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn finish(self) -> Vec<BoundField<T>> {
        self.fields
    }
}
