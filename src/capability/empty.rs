//! Canonical empty instances.
//!
//! Every container this crate understands can produce an empty instance of
//! itself without allocating. [`null_safe`](crate::view::null_safe) uses
//! this to replace an absent container by the empty one of the same shape.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::BuildHasher;

/// Containers with an allocation-free empty instance.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::capability::CanonicalEmpty;
///
/// let empty: Vec<i32> = CanonicalEmpty::canonical_empty();
/// assert!(empty.is_empty());
/// assert_eq!(empty.capacity(), 0);
///
/// let slice: &[u8] = CanonicalEmpty::canonical_empty();
/// assert!(slice.is_empty());
/// ```
pub trait CanonicalEmpty {
    /// Returns the empty instance.
    fn canonical_empty() -> Self;
}

impl<T> CanonicalEmpty for &[T] {
    #[inline]
    fn canonical_empty() -> Self {
        &[]
    }
}

impl CanonicalEmpty for &str {
    #[inline]
    fn canonical_empty() -> Self {
        ""
    }
}

impl<T> CanonicalEmpty for Vec<T> {
    #[inline]
    fn canonical_empty() -> Self {
        Self::new()
    }
}

impl<T> CanonicalEmpty for VecDeque<T> {
    #[inline]
    fn canonical_empty() -> Self {
        Self::new()
    }
}

impl<T> CanonicalEmpty for LinkedList<T> {
    #[inline]
    fn canonical_empty() -> Self {
        Self::new()
    }
}

impl<T, S: BuildHasher + Default> CanonicalEmpty for HashSet<T, S> {
    #[inline]
    fn canonical_empty() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T> CanonicalEmpty for BTreeSet<T> {
    #[inline]
    fn canonical_empty() -> Self {
        Self::new()
    }
}

impl<K, V, S: BuildHasher + Default> CanonicalEmpty for HashMap<K, V, S> {
    #[inline]
    fn canonical_empty() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V> CanonicalEmpty for BTreeMap<K, V> {
    #[inline]
    fn canonical_empty() -> Self {
        Self::new()
    }
}

impl<B> CanonicalEmpty for Cow<'_, B>
where
    B: ToOwned + ?Sized,
    B::Owned: CanonicalEmpty,
{
    #[inline]
    fn canonical_empty() -> Self {
        Cow::Owned(B::Owned::canonical_empty())
    }
}
