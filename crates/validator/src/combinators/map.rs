//! MAP combinator - validate map entries by key
//!
//! Rules are registered either for one specific key or for any key. A key
//! with its own rules is also checked by the wildcard rules; keys present in
//! the input without a registration are checked by the wildcard rules only.
//! A registered key that is absent from the input is skipped.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use indexmap::IndexMap;

use super::Join;
use super::error::{retag, JoinError, MapError, MapKey, MapKeyViolation};
use crate::foundation::{Context, ErrorAggregate, Validate, ValidationError, WithFormat};
use crate::message::{formats, ArgValue, Argument, Format};

// ============================================================================
// MAP INPUT
// ============================================================================

/// Associative containers a [`Map`] validator can read.
pub trait MapInput<K, V> {
    fn get_value(&self, key: &K) -> Option<&V>;

    /// Entries in the container's iteration order.
    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;
}

impl<K: Hash + Eq, V, S: BuildHasher> MapInput<K, V> for HashMap<K, V, S> {
    fn get_value(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K: Ord, V> MapInput<K, V> for BTreeMap<K, V> {
    fn get_value(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> MapInput<K, V> for IndexMap<K, V, S> {
    fn get_value(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

// ============================================================================
// MAP VALIDATOR
// ============================================================================

/// Validates the entries of a map of type `M` with rules over `T`.
///
/// Values only have to borrow as `T`, so `str` rules check `String` values.
/// Registered keys are reported first in registration order, then unbound
/// keys in the input's iteration order.
pub struct Map<M, K: 'static, V, T: ?Sized + 'static = V> {
    keyed: IndexMap<K, Join<T>>,
    any: Join<T>,
    format: Format,
    _input: PhantomData<fn(&M, &V)>,
}

impl<M, K, V, T> Map<M, K, V, T>
where
    M: MapInput<K, V>,
    K: Argument + Hash + Eq,
    V: Borrow<T> + fmt::Debug + 'static,
    T: ?Sized + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            keyed: IndexMap::new(),
            any: Join::new(),
            format: formats::MAP_KEY,
            _input: PhantomData,
        }
    }

    /// Registers `validator` for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already registered.
    #[must_use = "builder methods must be chained or built"]
    pub fn key<R>(mut self, key: K, validator: R) -> Self
    where
        R: Validate<Input = T> + Send + Sync + 'static,
    {
        assert!(
            !self.keyed.contains_key(&key),
            "map key `{}` is already registered",
            key.to_arg()
        );
        tracing::debug!(key = %key.to_arg(), "registered map key rule");
        self.keyed.insert(key, Join::new().with(validator));
        self
    }

    /// Registers `validator` for every key.
    #[must_use = "builder methods must be chained or built"]
    pub fn any<R>(mut self, validator: R) -> Self
    where
        R: Validate<Input = T> + Send + Sync + 'static,
    {
        self.any.push(validator);
        self
    }

    fn check_entry(&self, ctx: &Context, key: &K, value: &V) -> Option<ValidationError> {
        let mut errors = self
            .keyed
            .get(key)
            .map(|rules| rules.collect(ctx, value.borrow()))
            .unwrap_or_default();
        errors.extend(self.any.collect(ctx, value.borrow()));
        if errors.is_empty() {
            return None;
        }

        let key_arg = key.to_arg();
        let value_arg = ArgValue::capture(value);
        let tagged = errors
            .into_iter()
            .map(|error| {
                retag(error, |leaf| {
                    let payload = MapKeyViolation {
                        key: key_arg.clone(),
                        value: value_arg.clone(),
                        error: leaf,
                    };
                    ValidationError::violation(ctx, payload, &self.format)
                })
            })
            .collect();
        Some(JoinError::collapse(tagged))
    }
}

impl<M, K, V, T> Default for Map<M, K, V, T>
where
    M: MapInput<K, V>,
    K: Argument + Hash + Eq,
    V: Borrow<T> + fmt::Debug + 'static,
    T: ?Sized + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M, K: Clone + 'static, V, T: ?Sized + 'static> Clone for Map<M, K, V, T> {
    fn clone(&self) -> Self {
        Self {
            keyed: self.keyed.clone(),
            any: self.any.clone(),
            format: self.format.clone(),
            _input: PhantomData,
        }
    }
}

impl<M, K: fmt::Debug + 'static, V, T: ?Sized + 'static> fmt::Debug for Map<M, K, V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("keyed", &self.keyed)
            .field("any", &self.any)
            .field("format", &self.format)
            .finish()
    }
}

impl<M, K, V, T> Validate for Map<M, K, V, T>
where
    M: MapInput<K, V>,
    K: Argument + Hash + Eq,
    V: Borrow<T> + fmt::Debug + 'static,
    T: ?Sized + 'static,
{
    type Input = M;

    fn validate(&self, ctx: &Context, input: &M) -> Result<(), ValidationError> {
        let mut errors = ErrorAggregate::new();

        for key in self.keyed.keys() {
            let Some(value) = input.get_value(key) else {
                continue;
            };
            if let Some(error) = self.check_entry(ctx, key, value) {
                errors.insert(MapKey::new(key), error);
            }
        }

        if !self.any.is_empty() {
            for (key, value) in input.entries() {
                if self.keyed.contains_key(key) {
                    continue;
                }
                if let Some(error) = self.check_entry(ctx, key, value) {
                    errors.insert(MapKey::new(key), error);
                }
            }
        }

        errors.into_result(|errors| ValidationError::Map(MapError::new(errors)))
    }
}

impl<M, K: Clone + 'static, V, T: ?Sized + 'static> WithFormat for Map<M, K, V, T> {
    fn format(&self) -> &Format {
        &self.format
    }

    fn replace_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}

/// Creates an empty `Map` validator.
pub fn map<M, K, V, T>() -> Map<M, K, V, T>
where
    M: MapInput<K, V>,
    K: Argument + Hash + Eq,
    V: Borrow<T> + fmt::Debug + 'static,
    T: ?Sized + 'static,
{
    Map::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::from_fn;
    use crate::message::by_name;
    use pretty_assertions::assert_eq;

    fn non_zero() -> impl Validate<Input = i64> + Send + Sync + 'static {
        from_fn(|_: &Context, n: &i64| {
            if *n == 0 {
                Err(ValidationError::custom("is zero"))
            } else {
                Ok(())
            }
        })
    }

    fn small() -> impl Validate<Input = i64> + Send + Sync + 'static {
        from_fn(|_: &Context, n: &i64| {
            if *n < 100 {
                Ok(())
            } else {
                Err(ValidationError::custom("is too large"))
            }
        })
    }

    type Limits = BTreeMap<String, i64>;

    fn limits(entries: &[(&str, i64)]) -> Limits {
        entries.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
    }

    #[test]
    fn test_absent_registered_key_is_skipped() {
        let v: Map<Limits, String, i64> = map().key("cpu".to_owned(), non_zero()).any(non_zero());
        assert!(v.validate(&Context::new(), &Limits::new()).is_ok());
    }

    #[test]
    fn test_specific_and_wildcard_are_additive() {
        let v: Map<Limits, String, i64> = map().key("cpu".to_owned(), non_zero()).any(small());
        let err = v
            .validate(&Context::new(), &limits(&[("cpu", 0), ("mem", 500)]))
            .unwrap_err();
        assert_eq!(err.to_string(), "cpu: is zero\nmem: is too large");

        let err = v
            .validate(&Context::new(), &limits(&[("cpu", 0)]))
            .unwrap_err();
        assert_eq!(err.messages(), vec!["cpu: is zero"]);
    }

    #[test]
    fn test_both_rule_kinds_fail_on_one_key() {
        let v: Map<HashMap<String, i64>, String, i64> =
            map().key("cpu".to_owned(), small()).any(non_zero());
        let input = HashMap::from([("cpu".to_owned(), 1000)]);
        let err = v.validate(&Context::new(), &input).unwrap_err();
        let ValidationError::Map(map_err) = &err else {
            panic!("expected map error, got {err:?}");
        };
        assert_eq!(
            map_err.get(&"cpu".to_owned()).map(ToString::to_string).as_deref(),
            Some("cpu: is too large")
        );
    }

    #[test]
    fn test_registered_keys_reported_first() {
        let v: Map<IndexMap<String, i64>, String, i64> =
            map().key("z".to_owned(), small()).any(non_zero());
        let input: IndexMap<String, i64> =
            [("a".to_owned(), 0), ("z".to_owned(), 0)].into_iter().collect();
        let err = v.validate(&Context::new(), &input).unwrap_err();
        assert_eq!(err.messages(), vec!["z: is zero", "a: is zero"]);
    }

    #[test]
    fn test_owned_values_with_borrowed_rules() {
        let v: Map<HashMap<String, String>, String, String, str> =
            map().any(crate::validators::min_length(2));
        let input = HashMap::from([("env".to_owned(), "x".to_owned())]);
        let err = v.validate(&Context::new(), &input).unwrap_err();
        assert_eq!(err.to_string(), "env: the length must be no less than 2");
    }

    #[test]
    fn test_keys_with_equal_labels_stay_apart() {
        let v: Map<BTreeMap<Vec<String>, i64>, Vec<String>, i64> =
            map().any(crate::validators::min(0i64));
        let input = BTreeMap::from([
            (vec!["a b".to_owned()], -1),
            (vec!["a".to_owned(), "b".to_owned()], -2),
        ]);
        let err = v.validate(&Context::new(), &input).unwrap_err();
        let ValidationError::Map(map_err) = &err else {
            panic!("expected map error, got {err:?}");
        };
        assert_eq!(map_err.errors().len(), 2);
        assert_eq!(err.clone().into_leaves().len(), 2);
        assert!(map_err.get(&vec!["a b".to_owned()]).is_some());
        assert!(map_err.get(&vec!["a".to_owned(), "b".to_owned()]).is_some());
    }

    #[test]
    fn test_entry_value_is_captured_unquoted() {
        let v: Map<HashMap<String, String>, String, String, str> = map()
            .any(crate::validators::min_length(2))
            .with_format("{0}={1}: {2}", [by_name("key"), by_name("value"), by_name("error")]);
        let input = HashMap::from([("env".to_owned(), "x".to_owned())]);
        let err = v.validate(&Context::new(), &input).unwrap_err();
        assert_eq!(err.to_string(), "env=x: the length must be no less than 2");
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_key_panics() {
        let _: Map<Limits, String, i64> = map()
            .key("cpu".to_owned(), non_zero())
            .key("cpu".to_owned(), small());
    }
}
