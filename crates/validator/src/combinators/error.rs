//! Typed errors produced by the combinators.
//!
//! Each combinator reports through its own aggregate type so callers can
//! inspect failures structurally: by position for [`JoinError`], by index
//! for [`SliceError`], by key for [`MapError`] and by field name for
//! [`RecordError`].

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use crate::foundation::{ErrorAggregate, ValidationError, Violation};
use crate::message::{ArgValue, Argument};

// ============================================================================
// JOIN
// ============================================================================

/// Every failure of a [`Join`](super::Join), in child order.
#[derive(Debug, Clone)]
pub struct JoinError {
    errors: Vec<ValidationError>,
}

impl JoinError {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Wraps `errors` in a join, or returns the error itself when there is
    /// exactly one.
    #[must_use]
    pub fn collapse(mut errors: Vec<ValidationError>) -> ValidationError {
        if errors.len() == 1
            && let Some(single) = errors.pop()
        {
            return single;
        }
        ValidationError::Join(Self::new(errors))
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

// ============================================================================
// SLICE
// ============================================================================

/// Failures of a [`Slice`](super::Slice), keyed by element index.
#[derive(Debug, Clone)]
pub struct SliceError {
    errors: ErrorAggregate<usize>,
    len: usize,
}

impl SliceError {
    pub(crate) fn new(errors: ErrorAggregate<usize>, len: usize) -> Self {
        Self { errors, len }
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorAggregate<usize> {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> ErrorAggregate<usize> {
        self.errors
    }

    /// Length of the validated slice.
    #[must_use]
    pub fn input_len(&self) -> usize {
        self.len
    }

    /// Indices that failed, ascending.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.errors.keys().copied()
    }
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.errors, f)
    }
}

// ============================================================================
// MAP
// ============================================================================

/// A type-erased map key.
///
/// Holds the rendered label and the original key, which
/// [`downcast_ref`](Self::downcast_ref) recovers. Identity follows the
/// original key; the label is only used for display.
#[derive(Clone)]
pub struct MapKey {
    label: String,
    type_id: TypeId,
    hash: u64,
    value: Arc<dyn Any + Send + Sync>,
    eq: fn(&dyn Any, &dyn Any) -> bool,
}

impl MapKey {
    pub(crate) fn new<K: Argument + Hash + Eq>(key: &K) -> Self {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        Self {
            label: key.to_arg().to_string(),
            type_id: TypeId::of::<K>(),
            hash: hasher.finish(),
            value: Arc::new(key.clone()),
            eq: key_eq::<K>,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn downcast_ref<K: Any>(&self) -> Option<&K> {
        self.value.downcast_ref::<K>()
    }
}

fn key_eq<K: Any + Eq>(a: &dyn Any, b: &dyn Any) -> bool {
    match (a.downcast_ref::<K>(), b.downcast_ref::<K>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
            && self.hash == other.hash
            && (self.eq)(&*self.value, &*other.value)
    }
}

impl Eq for MapKey {}

impl Hash for MapKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        state.write_u64(self.hash);
    }
}

impl fmt::Debug for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MapKey").field(&self.label).finish()
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Failures of a [`Map`](super::Map), keyed by map key.
#[derive(Debug, Clone)]
pub struct MapError {
    errors: ErrorAggregate<MapKey>,
}

impl MapError {
    pub(crate) fn new(errors: ErrorAggregate<MapKey>) -> Self {
        Self { errors }
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorAggregate<MapKey> {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> ErrorAggregate<MapKey> {
        self.errors
    }

    /// The error recorded for `key`.
    pub fn get<K: Any + PartialEq>(&self, key: &K) -> Option<&ValidationError> {
        self.typed::<K>().find(|(k, _)| *k == key).map(|(_, e)| e)
    }

    /// Entries whose key has type `K`, in report order.
    pub fn typed<K: Any>(&self) -> impl Iterator<Item = (&K, &ValidationError)> {
        self.errors
            .iter()
            .filter_map(|(k, e)| k.downcast_ref::<K>().map(|k| (k, e)))
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.errors, f)
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// Failures of a [`Record`](super::Record), keyed by field name.
#[derive(Debug, Clone)]
pub struct RecordError {
    errors: ErrorAggregate<Cow<'static, str>>,
}

impl RecordError {
    pub(crate) fn new(errors: ErrorAggregate<Cow<'static, str>>) -> Self {
        Self { errors }
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorAggregate<Cow<'static, str>> {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> ErrorAggregate<Cow<'static, str>> {
        self.errors
    }

    /// The error recorded for the field labelled `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&ValidationError> {
        self.errors.get(name)
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.errors, f)
    }
}

// ============================================================================
// RE-TAGGING PAYLOADS
// ============================================================================

crate::payload! {
    /// Payload of a failing record field. Renders with `{0}: {1}` by default.
    #[derive(Debug, Clone)]
    pub struct FieldViolation {
        "name" => pub name: Cow<'static, str>,
        "value" => pub value: ArgValue,
        "error" => pub error: Violation,
    }
}

crate::payload! {
    /// Payload of a failing map entry. Renders with `{0}: {1}` by default.
    #[derive(Debug, Clone)]
    pub struct MapKeyViolation {
        "key" => pub key: ArgValue,
        "value" => pub value: ArgValue,
        "error" => pub error: Violation,
    }
}

/// Re-renders every leaf of `error` through `tag`.
///
/// Leaves are flattened first so an outer prefix lands once on each leaf.
pub(crate) fn retag(
    error: ValidationError,
    tag: impl FnMut(Violation) -> ValidationError,
) -> ValidationError {
    JoinError::collapse(error.into_leaves().into_iter().map(tag).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_single() {
        let err = JoinError::collapse(vec![ValidationError::custom("only")]);
        assert!(err.is_leaf());
    }

    #[test]
    fn test_collapse_many() {
        let err = JoinError::collapse(vec![
            ValidationError::custom("a"),
            ValidationError::custom("b"),
        ]);
        assert!(matches!(&err, ValidationError::Join(j) if j.errors().len() == 2));
    }

    #[test]
    fn test_map_key_recovers_typed_key() {
        let mut agg = ErrorAggregate::new();
        agg.insert(MapKey::new(&"port".to_string()), ValidationError::custom("bad port"));
        agg.insert(MapKey::new(&7u16), ValidationError::custom("bad seven"));
        let err = MapError::new(agg);

        assert_eq!(
            err.get(&"port".to_string()).map(ToString::to_string).as_deref(),
            Some("bad port")
        );
        assert_eq!(err.get(&7u16).map(ToString::to_string).as_deref(), Some("bad seven"));
        assert!(err.get(&7u32).is_none());
        assert_eq!(err.typed::<String>().count(), 1);
    }

    #[test]
    fn test_map_key_identity_includes_type() {
        assert_ne!(MapKey::new(&1u8), MapKey::new(&1u16));
        assert_eq!(MapKey::new(&1u8), MapKey::new(&1u8));
    }

    #[test]
    fn test_map_key_identity_ignores_label() {
        let spaced = MapKey::new(&vec!["a b".to_owned()]);
        let split = MapKey::new(&vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(spaced.label(), split.label());
        assert_ne!(spaced, split);

        let none = MapKey::new(&None::<String>);
        let nil = MapKey::new(&Some("<nil>".to_owned()));
        assert_eq!(none.label(), nil.label());
        assert_ne!(none, nil);

        let mut agg = ErrorAggregate::new();
        agg.insert(spaced, ValidationError::custom("first"));
        agg.insert(split, ValidationError::custom("second"));
        assert_eq!(agg.len(), 2);
    }
}
