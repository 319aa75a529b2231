//! Fallible structural mutation.
//!
//! Immutable views have no mutating inherent methods, so most misuse is a
//! compile error. Code that is generic over "something I can add to" goes
//! through these traits instead, and there the views answer at runtime
//! with [`CollectionError::UnsupportedOperation`]. The merge operations in
//! [`adapt`](crate::adapt) write into any implementor.
//!
//! # Examples
//!
//! ```rust
//! use nullsafe_collections::CollectionError;
//! use nullsafe_collections::capability::MutableCollection;
//!
//! let mut values = vec![1];
//! values.try_add(2)?;
//! values.try_add_all([3, 4])?;
//! assert_eq!(values, vec![1, 2, 3, 4]);
//! # Ok::<(), CollectionError>(())
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::CollectionError;

/// Containers of single elements that may accept structural changes.
pub trait MutableCollection<T> {
    /// Adds `element`, returning whether the container changed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] for read-only
    /// containers.
    fn try_add(&mut self, element: T) -> Result<bool, CollectionError>;

    /// Adds every element in iteration order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`try_add`](Self::try_add).
    fn try_add_all<I>(&mut self, elements: I) -> Result<usize, CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut changed = 0;
        for element in elements {
            if self.try_add(element)? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Removes one element equal to `element`, returning whether one was found.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] for read-only
    /// containers.
    fn try_remove(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq;

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] for read-only
    /// containers.
    fn try_clear(&mut self) -> Result<(), CollectionError>;
}

/// Key-value containers that may accept structural changes.
pub trait MutableMapping<K, V> {
    /// Associates `value` with `key`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] for read-only
    /// mappings.
    fn try_put(&mut self, key: K, value: V) -> Result<Option<V>, CollectionError>;

    /// Removes `key`, returning its value if it was present.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] for read-only
    /// mappings.
    fn try_remove_key(&mut self, key: &K) -> Result<Option<V>, CollectionError>;

    /// Removes every entry.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] for read-only
    /// mappings.
    fn try_clear(&mut self) -> Result<(), CollectionError>;
}

// =============================================================================
// Sequences
// =============================================================================

impl<T> MutableCollection<T> for Vec<T> {
    #[inline]
    fn try_add(&mut self, element: T) -> Result<bool, CollectionError> {
        self.push(element);
        Ok(true)
    }

    fn try_add_all<I>(&mut self, elements: I) -> Result<usize, CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.len();
        self.extend(elements);
        Ok(self.len() - before)
    }

    fn try_remove(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        Ok(self
            .iter()
            .position(|candidate| candidate == element)
            .map(|position| self.remove(position))
            .is_some())
    }

    #[inline]
    fn try_clear(&mut self) -> Result<(), CollectionError> {
        self.clear();
        Ok(())
    }
}

impl<T> MutableCollection<T> for VecDeque<T> {
    #[inline]
    fn try_add(&mut self, element: T) -> Result<bool, CollectionError> {
        self.push_back(element);
        Ok(true)
    }

    fn try_remove(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        Ok(self
            .iter()
            .position(|candidate| candidate == element)
            .and_then(|position| self.remove(position))
            .is_some())
    }

    #[inline]
    fn try_clear(&mut self) -> Result<(), CollectionError> {
        self.clear();
        Ok(())
    }
}

impl<T> MutableCollection<T> for LinkedList<T> {
    #[inline]
    fn try_add(&mut self, element: T) -> Result<bool, CollectionError> {
        self.push_back(element);
        Ok(true)
    }

    fn try_remove(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        let Some(position) = self.iter().position(|candidate| candidate == element) else {
            return Ok(false);
        };
        let mut tail = self.split_off(position);
        tail.pop_front();
        self.append(&mut tail);
        Ok(true)
    }

    #[inline]
    fn try_clear(&mut self) -> Result<(), CollectionError> {
        self.clear();
        Ok(())
    }
}

// =============================================================================
// Sets
// =============================================================================

impl<T: Eq + Hash, S: BuildHasher> MutableCollection<T> for HashSet<T, S> {
    #[inline]
    fn try_add(&mut self, element: T) -> Result<bool, CollectionError> {
        Ok(self.insert(element))
    }

    #[inline]
    fn try_remove(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        Ok(self.remove(element))
    }

    #[inline]
    fn try_clear(&mut self) -> Result<(), CollectionError> {
        self.clear();
        Ok(())
    }
}

impl<T: Ord> MutableCollection<T> for BTreeSet<T> {
    #[inline]
    fn try_add(&mut self, element: T) -> Result<bool, CollectionError> {
        Ok(self.insert(element))
    }

    #[inline]
    fn try_remove(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        Ok(self.remove(element))
    }

    #[inline]
    fn try_clear(&mut self) -> Result<(), CollectionError> {
        self.clear();
        Ok(())
    }
}

// =============================================================================
// Mappings
// =============================================================================

impl<K: Eq + Hash, V, S: BuildHasher> MutableMapping<K, V> for HashMap<K, V, S> {
    #[inline]
    fn try_put(&mut self, key: K, value: V) -> Result<Option<V>, CollectionError> {
        Ok(self.insert(key, value))
    }

    #[inline]
    fn try_remove_key(&mut self, key: &K) -> Result<Option<V>, CollectionError> {
        Ok(self.remove(key))
    }

    #[inline]
    fn try_clear(&mut self) -> Result<(), CollectionError> {
        self.clear();
        Ok(())
    }
}

impl<K: Ord, V> MutableMapping<K, V> for BTreeMap<K, V> {
    #[inline]
    fn try_put(&mut self, key: K, value: V) -> Result<Option<V>, CollectionError> {
        Ok(self.insert(key, value))
    }

    #[inline]
    fn try_remove_key(&mut self, key: &K) -> Result<Option<V>, CollectionError> {
        Ok(self.remove(key))
    }

    #[inline]
    fn try_clear(&mut self) -> Result<(), CollectionError> {
        self.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_vec_remove_takes_first_occurrence() {
        let mut values = vec![1, 2, 1];
        assert_eq!(values.try_remove(&1), Ok(true));
        assert_eq!(values, vec![2, 1]);
        assert_eq!(values.try_remove(&7), Ok(false));
    }

    #[rstest]
    fn test_linked_list_remove_keeps_order() {
        let mut values: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(values.try_remove(&2), Ok(true));
        assert_eq!(values.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[rstest]
    fn test_set_add_reports_duplicates() {
        let mut set: HashSet<&str> = HashSet::new();
        assert_eq!(set.try_add("a"), Ok(true));
        assert_eq!(set.try_add("a"), Ok(false));
        assert_eq!(set.try_add_all(["a", "b", "c"]), Ok(2));
    }

    #[rstest]
    fn test_map_put_returns_previous_value() {
        let mut map: BTreeMap<&str, i32> = BTreeMap::new();
        assert_eq!(map.try_put("k", 1), Ok(None));
        assert_eq!(map.try_put("k", 2), Ok(Some(1)));
        assert_eq!(map.try_remove_key(&"k"), Ok(Some(2)));
        assert_eq!(MutableMapping::try_clear(&mut map), Ok(()));
    }
}
