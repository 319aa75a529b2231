//! The membership capability: "does this collection contain `element`?"
//!
//! Query algorithms such as [`contains_any`](crate::query::contains_any)
//! only need this test and the element count, so they accept any
//! `Membership` implementor rather than a concrete container. Callers must
//! not assume a lookup is faster than O(n); sequences answer by scanning.
//!
//! Mappings answer for their keys, which makes a map usable wherever its
//! key view would be.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use super::CollectionLength;

/// Types that can test whether they contain an element.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::capability::Membership;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
/// assert!(set.contains_member(&2));
/// assert!(!vec![1, 2, 3].contains_member(&4));
/// ```
pub trait Membership<T: ?Sized>: CollectionLength {
    /// Returns `true` if an element equal to `element` is present.
    fn contains_member(&self, element: &T) -> bool;
}

impl<T: ?Sized, C: Membership<T> + ?Sized> Membership<T> for &C {
    #[inline]
    fn contains_member(&self, element: &T) -> bool {
        (**self).contains_member(element)
    }
}

impl<T: PartialEq> Membership<T> for [T] {
    #[inline]
    fn contains_member(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq, const N: usize> Membership<T> for [T; N] {
    #[inline]
    fn contains_member(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq> Membership<T> for Vec<T> {
    #[inline]
    fn contains_member(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq> Membership<T> for VecDeque<T> {
    #[inline]
    fn contains_member(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq> Membership<T> for LinkedList<T> {
    #[inline]
    fn contains_member(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T, Q, S> Membership<Q> for HashSet<T, S>
where
    T: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn contains_member(&self, element: &Q) -> bool {
        self.contains(element)
    }
}

impl<T, Q> Membership<Q> for BTreeSet<T>
where
    T: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    #[inline]
    fn contains_member(&self, element: &Q) -> bool {
        self.contains(element)
    }
}

impl<K, V, Q, S> Membership<Q> for HashMap<K, V, S>
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

impl<K, V, Q> Membership<Q> for BTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    #[inline]
    fn contains_member(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_sequence_membership_uses_equality() {
        let values = vec!["a".to_string(), "b".to_string()];
        assert!(values.contains_member(&"b".to_string()));
        assert!(!values.contains_member(&"c".to_string()));
    }

    #[rstest]
    fn test_hash_set_membership_accepts_borrowed_form() {
        let set: HashSet<String> = ["hello".to_string()].into_iter().collect();
        assert!(set.contains_member("hello"));
    }

    #[rstest]
    fn test_map_membership_tests_keys() {
        let map: BTreeMap<i32, &str> = [(1, "one")].into_iter().collect();
        assert!(map.contains_member(&1));
        assert!(!Membership::<i32>::contains_member(&map, &2));
    }

    #[rstest]
    fn test_null_elements_compare_equal() {
        let values: Vec<Option<i32>> = vec![Some(1), None];
        assert!(values.contains_member(&None));
        assert!(!vec![Some(1)].contains_member(&None));
    }
}
