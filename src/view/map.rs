//! Immutable key-value view.
//!
//! [`ImmutableMap`] wraps a `HashMap` that it owns outright. Wrapping moves
//! the map behind a reference counter without touching its entries, and
//! the empty map owns no allocation.
//!
//! # Examples
//!
//! ```rust
//! use nullsafe_collections::view::ImmutableMap;
//! use std::collections::HashMap;
//!
//! let mut headers = HashMap::new();
//! headers.insert("alg", "HS256");
//!
//! let view = ImmutableMap::from(headers);
//! assert_eq!(view.get("alg"), Some(&"HS256"));
//! assert_eq!(view.len(), 1);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use crate::CollectionError;
use crate::ReferenceCounter;
use crate::capability::{CanonicalEmpty, CollectionLength, Membership, MutableMapping};

/// An immutable mapping from unique keys to values.
///
/// Iteration order is the order of the wrapped `HashMap`.
///
/// # Type Parameters
///
/// * `K` - The key type.
/// * `V` - The value type.
/// * `S` - The hasher of the wrapped map.
pub struct ImmutableMap<K, V, S = RandomState> {
    entries: Option<ReferenceCounter<HashMap<K, V, S>>>,
}

impl<K, V, S> ImmutableMap<K, V, S> {
    /// Returns the canonical empty map. Never allocates.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { entries: None }
    }

    /// Takes ownership of `map` without copying its entries.
    ///
    /// An empty map yields the canonical empty map.
    #[must_use]
    pub fn from_map(map: HashMap<K, V, S>) -> Self {
        if map.is_empty() {
            Self::empty()
        } else {
            Self {
                entries: Some(ReferenceCounter::new(map)),
            }
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.as_deref().map_or(0, HashMap::len)
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_none()
    }

    /// Returns the wrapped map, or `None` for the empty map.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&HashMap<K, V, S>> {
        self.entries.as_deref()
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().flat_map(|entries| entries.iter())
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns `true` if both maps share the same storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.entries, &other.entries) {
            (None, None) => true,
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> ImmutableMap<K, V, S> {
    /// Returns the value for `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.as_deref()?.get(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.get(key).is_some()
    }
}

impl<K, V, S> Clone for ImmutableMap<K, V, S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<K, V, S> Default for ImmutableMap<K, V, S> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ImmutableMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> PartialEq for ImmutableMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        match (&self.entries, &other.entries) {
            (None, None) => true,
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right) || left == right,
            _ => false,
        }
    }
}

impl<K: Eq + Hash, V: Eq, S: BuildHasher> Eq for ImmutableMap<K, V, S> {}

impl<K, V, S> From<HashMap<K, V, S>> for ImmutableMap<K, V, S> {
    #[inline]
    fn from(map: HashMap<K, V, S>) -> Self {
        Self::from_map(map)
    }
}

impl<K, V, S> FromIterator<(K, V)> for ImmutableMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}

impl<K, V, S> CollectionLength for ImmutableMap<K, V, S> {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

impl<K, V, Q, S> Membership<Q> for ImmutableMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn contains_member(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

impl<K, V, S> CanonicalEmpty for ImmutableMap<K, V, S> {
    #[inline]
    fn canonical_empty() -> Self {
        Self::empty()
    }
}

impl<K, V, S> MutableMapping<K, V> for ImmutableMap<K, V, S> {
    fn try_put(&mut self, _key: K, _value: V) -> Result<Option<V>, CollectionError> {
        Err(CollectionError::unsupported("put", "ImmutableMap"))
    }

    fn try_remove_key(&mut self, _key: &K) -> Result<Option<V>, CollectionError> {
        Err(CollectionError::unsupported("remove", "ImmutableMap"))
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        Err(CollectionError::unsupported("clear", "ImmutableMap"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> ImmutableMap<String, i32> {
        [("one".to_string(), 1), ("two".to_string(), 2)]
            .into_iter()
            .collect()
    }

    #[rstest]
    fn test_lookup_by_borrowed_key() {
        let map = sample();
        assert_eq!(map.get("two"), Some(&2));
        assert!(map.contains_key("one"));
        assert!(!map.contains_member("three"));
    }

    #[rstest]
    fn test_empty_map_has_no_entries() {
        let map: ImmutableMap<String, i32> = ImmutableMap::empty();
        assert_eq!(map.len(), 0);
        assert_eq!(map.iter().count(), 0);
        assert_eq!(map.get("one"), None);
        assert!(map.as_map().is_none());
    }

    #[rstest]
    fn test_wrapping_empty_map_is_canonical() {
        let map = ImmutableMap::from(HashMap::<i32, i32>::new());
        assert!(map.is_empty());
        assert_eq!(map, ImmutableMap::empty());
    }

    #[rstest]
    fn test_keys_and_values() {
        let map = sample();
        let mut keys: Vec<&String> = map.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["one", "two"]);
        assert_eq!(map.values().sum::<i32>(), 3);
    }

    #[rstest]
    fn test_mutation_is_rejected() {
        let mut map = sample();
        assert_eq!(
            map.try_put("three".to_string(), 3),
            Err(CollectionError::unsupported("put", "ImmutableMap"))
        );
        assert!(map.try_remove_key(&"one".to_string()).is_err());
        assert!(MutableMapping::try_clear(&mut map).is_err());
        assert_eq!(map.len(), 2);
    }

    #[rstest]
    fn test_equality_ignores_storage() {
        assert_eq!(sample(), sample());
        assert_ne!(sample(), ImmutableMap::empty());
    }
}
