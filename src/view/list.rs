//! Immutable, ordered sequence view.
//!
//! [`ImmutableList`] keeps its elements in a reference-counted `Vec`, so
//! cloning a list is O(1) and every clone observes the same elements. The
//! empty list owns no allocation at all.
//!
//! # Examples
//!
//! ```rust
//! use nullsafe_collections::view::ImmutableList;
//!
//! let list = ImmutableList::from(vec![3, 1, 3]);
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(1), Some(&1));
//!
//! // Read-only slice API through `Deref`
//! assert!(list.contains(&3));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1, 3]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Deref;

use crate::CollectionError;
use crate::ReferenceCounter;
use crate::capability::{CanonicalEmpty, CollectionLength, Membership, MutableCollection};

/// An immutable sequence that preserves order and keeps duplicates.
///
/// # Type Parameters
///
/// * `T` - The element type.
pub struct ImmutableList<T> {
    elements: Option<ReferenceCounter<Vec<T>>>,
}

impl<T> ImmutableList<T> {
    /// Returns the canonical empty list. Never allocates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullsafe_collections::view::ImmutableList;
    ///
    /// let empty: ImmutableList<i32> = ImmutableList::empty();
    /// assert!(empty.is_empty());
    /// assert_eq!(empty, ImmutableList::empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { elements: None }
    }

    /// Takes ownership of `elements` without copying them.
    ///
    /// An empty vector yields the canonical empty list.
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        if elements.is_empty() {
            Self::empty()
        } else {
            Self {
                elements: Some(ReferenceCounter::new(elements)),
            }
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_none()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match &self.elements {
            Some(elements) => elements.as_slice(),
            None => &[],
        }
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns `true` if both lists share the same storage.
    ///
    /// Two empty lists always share storage, since neither has any.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.elements, &other.elements) {
            (None, None) => true,
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Copies the elements into a new, independently mutable vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

impl<T> Deref for ImmutableList<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for ImmutableList<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Clone for ImmutableList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<T> Default for ImmutableList<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ImmutableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ImmutableList<T> {}

impl<T: Hash> Hash for ImmutableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for ImmutableList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Moves the elements out when this is the last handle, otherwise clones them.
    fn into_iter(self) -> Self::IntoIter {
        self.elements
            .map(|shared| ReferenceCounter::try_unwrap(shared).unwrap_or_else(|shared| (*shared).clone()))
            .unwrap_or_default()
            .into_iter()
    }
}

// =============================================================================
// Capabilities
// =============================================================================

impl<T> CollectionLength for ImmutableList<T> {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq> Membership<T> for ImmutableList<T> {
    #[inline]
    fn contains_member(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T> CanonicalEmpty for ImmutableList<T> {
    #[inline]
    fn canonical_empty() -> Self {
        Self::empty()
    }
}

impl<T> MutableCollection<T> for ImmutableList<T> {
    fn try_add(&mut self, _element: T) -> Result<bool, CollectionError> {
        Err(CollectionError::unsupported("add", "ImmutableList"))
    }

    fn try_add_all<I>(&mut self, _elements: I) -> Result<usize, CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        Err(CollectionError::unsupported("add_all", "ImmutableList"))
    }

    fn try_remove(&mut self, _element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        Err(CollectionError::unsupported("remove", "ImmutableList"))
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        Err(CollectionError::unsupported("clear", "ImmutableList"))
    }
}
