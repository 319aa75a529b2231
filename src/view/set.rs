//! Immutable, insertion-ordered set view.
//!
//! This module provides [`ImmutableSet`], a set that remembers the order in
//! which distinct elements were first inserted, and [`SetBuilder`], its
//! mutable companion used while the set is being assembled.
//!
//! # Overview
//!
//! Like a linked hash set, an `ImmutableSet`:
//! - collapses duplicates according to the element's own `Eq`/`Hash`
//! - iterates in first-occurrence order
//! - compares equal to another set with the same elements in any order
//!
//! # State Transitions
//!
//! Storage depends on size, decided once when the builder is finished:
//!
//! ```text
//!     0 elements      ──► Empty  (no allocation)
//!     1..=8 elements  ──► Small  (inline SmallVec, linear search)
//!     9+ elements     ──► Large  (Vec + hash-bucket index of positions)
//! ```
//!
//! # Time Complexity
//!
//! | Operation  | Small (n <= 8) | Large (n > 8)  |
//! |------------|----------------|----------------|
//! | `contains` | O(n)           | O(1) expected  |
//! | `len`      | O(1)           | O(1)           |
//! | `iter`     | O(n)           | O(n)           |
//! | `clone`    | O(1)           | O(1)           |
//!
//! # Examples
//!
//! ```rust
//! use nullsafe_collections::view::ImmutableSet;
//!
//! let set: ImmutableSet<char> = "abacus".chars().collect();
//! assert_eq!(set.iter().collect::<String>(), "abcus");
//! assert!(set.contains(&'u'));
//! assert_eq!(set.len(), 5);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use smallvec::SmallVec;

use super::IndexHasher;
use crate::CollectionError;
use crate::ReferenceCounter;
use crate::capability::{CanonicalEmpty, CollectionLength, Membership, MutableCollection};

/// Sets with more than this many elements get a hash index.
const SMALL_THRESHOLD: usize = 8;

// =============================================================================
// Indexed storage
// =============================================================================

/// Elements in insertion order plus a map from element hash to positions.
struct IndexedElements<T> {
    elements: Vec<T>,
    buckets: HashMap<u64, SmallVec<[usize; 2]>, IndexHasher>,
    hasher: IndexHasher,
}

impl<T: Eq + Hash> IndexedElements<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            buckets: HashMap::with_capacity_and_hasher(capacity, IndexHasher::default()),
            hasher: IndexHasher::default(),
        }
    }

    fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let hash = self.hasher.hash_one(element);
        self.buckets
            .get(&hash)?
            .iter()
            .copied()
            .find(|&position| self.elements[position].borrow() == element)
    }

    fn insert(&mut self, element: T) -> bool {
        let hash = self.hasher.hash_one(&element);
        let bucket = self.buckets.entry(hash).or_default();
        if bucket
            .iter()
            .any(|&position| self.elements[position] == element)
        {
            return false;
        }
        bucket.push(self.elements.len());
        self.elements.push(element);
        true
    }
}

// =============================================================================
// ImmutableSet
// =============================================================================

enum ImmutableSetInner<T> {
    Empty,
    Small(ReferenceCounter<SmallVec<[T; SMALL_THRESHOLD]>>),
    Large(ReferenceCounter<IndexedElements<T>>),
}

/// An immutable set that iterates in first-insertion order.
///
/// Build one with [`FromIterator`], [`SetBuilder`], or the constructors in
/// [`view`](crate::view) such as [`set_of`](crate::view::set_of). Cloning
/// shares storage.
///
/// # Type Parameters
///
/// * `T` - The element type. Lookups and construction need `Eq + Hash`.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::view::ImmutableSet;
///
/// let left: ImmutableSet<i32> = [1, 2, 3].into_iter().collect();
/// let right: ImmutableSet<i32> = [3, 2, 1, 1].into_iter().collect();
///
/// // Same elements, different order: still equal
/// assert_eq!(left, right);
/// assert_eq!(right.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
pub struct ImmutableSet<T> {
    inner: ImmutableSetInner<T>,
}

impl<T> ImmutableSet<T> {
    /// Returns the canonical empty set. Never allocates.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            inner: ImmutableSetInner::Empty,
        }
    }

    /// Returns the number of distinct elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the set has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.inner, ImmutableSetInner::Empty)
    }

    /// Returns the elements in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match &self.inner {
            ImmutableSetInner::Empty => &[],
            ImmutableSetInner::Small(elements) => elements.as_slice(),
            ImmutableSetInner::Large(indexed) => indexed.elements.as_slice(),
        }
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns the first inserted element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns `true` if both sets share the same storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (ImmutableSetInner::Empty, ImmutableSetInner::Empty) => true,
            (ImmutableSetInner::Small(left), ImmutableSetInner::Small(right)) => {
                ReferenceCounter::ptr_eq(left, right)
            }
            (ImmutableSetInner::Large(left), ImmutableSetInner::Large(right)) => {
                ReferenceCounter::ptr_eq(left, right)
            }
            _ => false,
        }
    }
}

impl<T: Eq + Hash> ImmutableSet<T> {
    /// Returns `true` if the set contains `element`.
    ///
    /// Accepts borrowed forms, so an `ImmutableSet<String>` can be searched
    /// with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullsafe_collections::view::ImmutableSet;
    ///
    /// let set: ImmutableSet<String> = ["alg".to_string(), "kid".to_string()]
    ///     .into_iter()
    ///     .collect();
    /// assert!(set.contains("kid"));
    /// assert!(!set.contains("typ"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        match &self.inner {
            ImmutableSetInner::Empty => false,
            ImmutableSetInner::Small(elements) => {
                elements.iter().any(|candidate| candidate.borrow() == element)
            }
            ImmutableSetInner::Large(indexed) => indexed.position(element).is_some(),
        }
    }

    /// Returns a builder pre-filled with this set's elements.
    #[must_use]
    pub fn to_builder(&self) -> SetBuilder<T>
    where
        T: Clone,
    {
        let mut builder = SetBuilder::with_capacity(self.len());
        builder.extend(self.iter().cloned());
        builder
    }
}

impl<T> Clone for ImmutableSet<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: match &self.inner {
                ImmutableSetInner::Empty => ImmutableSetInner::Empty,
                ImmutableSetInner::Small(elements) => {
                    ImmutableSetInner::Small(ReferenceCounter::clone(elements))
                }
                ImmutableSetInner::Large(indexed) => {
                    ImmutableSetInner::Large(ReferenceCounter::clone(indexed))
                }
            },
        }
    }
}

impl<T> Default for ImmutableSet<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Eq + Hash> PartialEq for ImmutableSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other)
            || (self.len() == other.len() && self.iter().all(|element| other.contains(element)))
    }
}

impl<T: Eq + Hash> Eq for ImmutableSet<T> {}

impl<T: Eq + Hash> FromIterator<T> for ImmutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut builder = SetBuilder::with_capacity(iter.size_hint().0);
        builder.extend(iter);
        builder.build()
    }
}

impl<'a, T> IntoIterator for &'a ImmutableSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for ImmutableSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let elements: Vec<T> = match self.inner {
            ImmutableSetInner::Empty => Vec::new(),
            ImmutableSetInner::Small(shared) => ReferenceCounter::try_unwrap(shared)
                .map_or_else(|shared| shared.to_vec(), SmallVec::into_vec),
            ImmutableSetInner::Large(shared) => ReferenceCounter::try_unwrap(shared).map_or_else(
                |shared| shared.elements.clone(),
                |indexed| indexed.elements,
            ),
        };
        elements.into_iter()
    }
}

impl<T> CollectionLength for ImmutableSet<T> {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

impl<T, Q> Membership<Q> for ImmutableSet<T>
where
    T: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    #[inline]
    fn contains_member(&self, element: &Q) -> bool {
        self.contains(element)
    }
}

impl<T> CanonicalEmpty for ImmutableSet<T> {
    #[inline]
    fn canonical_empty() -> Self {
        Self::empty()
    }
}

impl<T> MutableCollection<T> for ImmutableSet<T> {
    fn try_add(&mut self, _element: T) -> Result<bool, CollectionError> {
        Err(CollectionError::unsupported("add", "ImmutableSet"))
    }

    fn try_add_all<I>(&mut self, _elements: I) -> Result<usize, CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        Err(CollectionError::unsupported("add_all", "ImmutableSet"))
    }

    fn try_remove(&mut self, _element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        Err(CollectionError::unsupported("remove", "ImmutableSet"))
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        Err(CollectionError::unsupported("clear", "ImmutableSet"))
    }
}

// =============================================================================
// SetBuilder
// =============================================================================

enum SetBuilderInner<T> {
    Small(SmallVec<[T; SMALL_THRESHOLD]>),
    Large(IndexedElements<T>),
}

/// Mutable, single-owner builder for [`ImmutableSet`].
///
/// Insertions keep first-occurrence order and ignore duplicates. Call
/// [`build`](Self::build) to freeze the result.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::view::SetBuilder;
///
/// let mut builder = SetBuilder::new();
/// assert!(builder.insert("b"));
/// assert!(builder.insert("a"));
/// assert!(!builder.insert("b"));
///
/// let set = builder.build();
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
/// ```
pub struct SetBuilder<T> {
    inner: SetBuilderInner<T>,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    duplicates: usize,
}

impl<T: Eq + Hash> SetBuilder<T> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty builder sized for `capacity` distinct elements.
    ///
    /// The capacity is only a hint.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let inner = if capacity > SMALL_THRESHOLD {
            SetBuilderInner::Large(IndexedElements::with_capacity(capacity))
        } else {
            SetBuilderInner::Small(SmallVec::new())
        };
        Self {
            inner,
            duplicates: 0,
        }
    }

    /// Returns the number of distinct elements inserted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.inner {
            SetBuilderInner::Small(elements) => elements.len(),
            SetBuilderInner::Large(indexed) => indexed.elements.len(),
        }
    }

    /// Returns `true` if nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `element` unless an equal one is already present.
    ///
    /// Returns `true` if the element was new.
    pub fn insert(&mut self, element: T) -> bool {
        let inserted = match &mut self.inner {
            SetBuilderInner::Small(elements) => {
                if elements.contains(&element) {
                    false
                } else if elements.len() < SMALL_THRESHOLD {
                    elements.push(element);
                    true
                } else {
                    let mut indexed = IndexedElements::with_capacity(SMALL_THRESHOLD * 2);
                    for existing in elements.drain(..) {
                        indexed.insert(existing);
                    }
                    indexed.insert(element);
                    self.inner = SetBuilderInner::Large(indexed);
                    true
                }
            }
            SetBuilderInner::Large(indexed) => indexed.insert(element),
        };
        if !inserted {
            self.duplicates += 1;
        }
        inserted
    }

    /// Freezes the builder into an [`ImmutableSet`].
    #[must_use]
    pub fn build(self) -> ImmutableSet<T> {
        crate::trace_event!(
            len = self.len(),
            duplicates = self.duplicates,
            "built immutable set"
        );
        if self.is_empty() {
            return ImmutableSet::empty();
        }
        let inner = match self.inner {
            SetBuilderInner::Small(elements) => {
                ImmutableSetInner::Small(ReferenceCounter::new(elements))
            }
            SetBuilderInner::Large(indexed) => {
                ImmutableSetInner::Large(ReferenceCounter::new(indexed))
            }
        };
        ImmutableSet { inner }
    }
}

impl<T: Eq + Hash> Default for SetBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Extend<T> for SetBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}
