//! Element counting and the null-safe `size` / `is_empty` helpers.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

/// Types that know how many elements (or entries) they hold.
///
/// This is the smallest capability shared by every container shape. It is
/// what lets [`size`] and [`is_empty`] treat an absent container and a
/// present-but-empty one the same way.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::capability::CollectionLength;
///
/// assert_eq!(vec![1, 2, 3].collection_len(), 3);
/// assert!(Vec::<i32>::new().is_collection_empty());
/// ```
pub trait CollectionLength {
    /// Returns the number of elements or entries.
    fn collection_len(&self) -> usize;

    /// Returns `true` if [`collection_len`](Self::collection_len) is zero.
    #[inline]
    fn is_collection_empty(&self) -> bool {
        self.collection_len() == 0
    }
}

impl<C: CollectionLength + ?Sized> CollectionLength for &C {
    #[inline]
    fn collection_len(&self) -> usize {
        (**self).collection_len()
    }
}

impl<T> CollectionLength for [T] {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> CollectionLength for [T; N] {
    #[inline]
    fn collection_len(&self) -> usize {
        N
    }
}

impl<T> CollectionLength for Vec<T> {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

impl<T> CollectionLength for VecDeque<T> {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

impl<T> CollectionLength for LinkedList<T> {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

impl<T, S> CollectionLength for HashSet<T, S> {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

impl<T> CollectionLength for BTreeSet<T> {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> CollectionLength for HashMap<K, V, S> {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

impl<K, V> CollectionLength for BTreeMap<K, V> {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

/// Returns the container's size, or `0` if it is absent.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::capability::size;
/// use std::collections::HashMap;
///
/// assert_eq!(size(Some(&vec![1, 2])), 2);
/// assert_eq!(size::<Vec<i32>>(None), 0);
///
/// let map: HashMap<&str, i32> = [("a", 1)].into_iter().collect();
/// assert_eq!(size(Some(&map)), 1);
/// ```
#[inline]
#[must_use]
pub fn size<C: CollectionLength + ?Sized>(container: Option<&C>) -> usize {
    container.map_or(0, <C as CollectionLength>::collection_len)
}

/// Returns `true` if the container is absent or holds no elements.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::capability::is_empty;
///
/// assert!(is_empty::<Vec<i32>>(None));
/// assert!(is_empty(Some(&Vec::<i32>::new())));
/// assert!(!is_empty(Some(&vec![0])));
/// ```
#[inline]
#[must_use]
pub fn is_empty<C: CollectionLength + ?Sized>(container: Option<&C>) -> bool {
    size(container) == 0
}
