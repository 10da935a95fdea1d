//! Insertion-ordered mapping from a discriminator to a child error.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use super::ValidationError;

/// Ordered, keyed container of child errors.
///
/// Keys are field names, slice indices or map keys. Iteration follows
/// insertion order. An empty aggregate stands for "no error" and converts to
/// `Ok(())` through [`into_result`](Self::into_result).
#[derive(Debug, Clone)]
pub struct ErrorAggregate<K> {
    entries: IndexMap<K, ValidationError>,
}

impl<K> Default for ErrorAggregate<K> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> ErrorAggregate<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. A repeated key keeps its original position.
    pub fn insert(&mut self, key: K, error: ValidationError) -> Option<ValidationError> {
        self.entries.insert(key, error)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&ValidationError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Wraps a non-empty aggregate with `wrap`; an empty one is success.
    pub fn into_result(
        self,
        wrap: impl FnOnce(Self) -> ValidationError,
    ) -> Result<(), ValidationError> {
        if self.is_empty() { Ok(()) } else { Err(wrap(self)) }
    }
}

impl<K> ErrorAggregate<K> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &ValidationError> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &ValidationError)> {
        self.entries.iter()
    }

    pub fn into_values(self) -> impl Iterator<Item = ValidationError> {
        self.entries.into_values()
    }
}

impl<K: Hash + Eq> FromIterator<(K, ValidationError)> for ErrorAggregate<K> {
    fn from_iter<I: IntoIterator<Item = (K, ValidationError)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K> IntoIterator for ErrorAggregate<K> {
    type Item = (K, ValidationError);
    type IntoIter = indexmap::map::IntoIter<K, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a ErrorAggregate<K> {
    type Item = (&'a K, &'a ValidationError);
    type IntoIter = indexmap::map::Iter<'a, K, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K> fmt::Display for ErrorAggregate<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.entries.values().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}
