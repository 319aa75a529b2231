//! Legacy "has more / next" cursors and their bridge to [`Iterator`].
//!
//! [`Enumeration`] is the two-step cursor protocol some stores still
//! expose: ask whether another element exists, then fetch it.
//! [`enumerate`] adapts any iterator to that protocol and [`to_iterator`]
//! goes the other way. The iterator produced by [`to_iterator`] only
//! projects elements; its removal path fails with
//! [`CollectionError::UnsupportedOperation`].

use std::borrow::Borrow;
use std::fmt;
use std::iter::{FusedIterator, Peekable};

use crate::CollectionError;
use crate::capability::MutableCollection;

// =============================================================================
// Enumeration Trait
// =============================================================================

/// A forward-only cursor with a separate "has more" test.
///
/// # Laws
///
/// - Once `has_more_elements` returns `false`, `next_element` returns `None`.
/// - `has_more_elements` does not consume an element.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::adapt::{enumerate, Enumeration};
///
/// let mut cursor = enumerate(["a", "b"]);
/// assert!(cursor.has_more_elements());
/// assert_eq!(cursor.next_element(), Some("a"));
/// assert_eq!(cursor.next_element(), Some("b"));
/// assert!(!cursor.has_more_elements());
/// ```
pub trait Enumeration {
    /// The type of elements produced.
    type Item;

    /// Returns `true` if [`next_element`](Self::next_element) will produce an element.
    fn has_more_elements(&mut self) -> bool;

    /// Advances the cursor and returns the element, or `None` once exhausted.
    fn next_element(&mut self) -> Option<Self::Item>;
}

impl<E: Enumeration + ?Sized> Enumeration for &mut E {
    type Item = E::Item;

    #[inline]
    fn has_more_elements(&mut self) -> bool {
        (**self).has_more_elements()
    }

    #[inline]
    fn next_element(&mut self) -> Option<Self::Item> {
        (**self).next_element()
    }
}

// =============================================================================
// Iterator -> Enumeration
// =============================================================================

/// An [`Enumeration`] over the elements of an iterator.
///
/// Created by [`enumerate`].
pub struct IteratorEnumeration<I: Iterator> {
    elements: Peekable<I>,
}

impl<I: Iterator> Enumeration for IteratorEnumeration<I> {
    type Item = I::Item;

    #[inline]
    fn has_more_elements(&mut self) -> bool {
        self.elements.peek().is_some()
    }

    #[inline]
    fn next_element(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }
}

impl<I> fmt::Debug for IteratorEnumeration<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IteratorEnumeration")
            .field("elements", &self.elements)
            .finish()
    }
}

/// Adapts any iterable to the [`Enumeration`] protocol.
#[must_use]
pub fn enumerate<I: IntoIterator>(iterable: I) -> IteratorEnumeration<I::IntoIter> {
    IteratorEnumeration {
        elements: iterable.into_iter().peekable(),
    }
}

// =============================================================================
// Enumeration -> Iterator
// =============================================================================

/// A single-pass iterator draining an [`Enumeration`].
///
/// Created by [`to_iterator`]. Fused: after the first `None` the wrapped
/// enumeration is dropped and never polled again.
pub struct EnumerationIterator<E> {
    enumeration: Option<E>,
}

impl<E: Enumeration> EnumerationIterator<E> {
    /// Always fails: the adapter cannot remove from the underlying enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] unconditionally.
    pub const fn remove(&mut self) -> Result<(), CollectionError> {
        Err(CollectionError::unsupported("remove", "EnumerationIterator"))
    }
}

impl<E: Enumeration> Iterator for EnumerationIterator<E> {
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let enumeration = self.enumeration.as_mut()?;
        let next = if enumeration.has_more_elements() {
            enumeration.next_element()
        } else {
            None
        };
        if next.is_none() {
            self.enumeration = None;
        }
        next
    }
}

impl<E: Enumeration> FusedIterator for EnumerationIterator<E> {}

impl<E: Enumeration> MutableCollection<E::Item> for EnumerationIterator<E> {
    fn try_add(&mut self, _element: E::Item) -> Result<bool, CollectionError> {
        Err(CollectionError::unsupported("add", "EnumerationIterator"))
    }

    fn try_add_all<I>(&mut self, _elements: I) -> Result<usize, CollectionError>
    where
        I: IntoIterator<Item = E::Item>,
    {
        Err(CollectionError::unsupported("add_all", "EnumerationIterator"))
    }

    fn try_remove(&mut self, _element: &E::Item) -> Result<bool, CollectionError>
    where
        E::Item: PartialEq,
    {
        Err(CollectionError::unsupported("remove", "EnumerationIterator"))
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        Err(CollectionError::unsupported("clear", "EnumerationIterator"))
    }
}

impl<E> fmt::Debug for EnumerationIterator<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EnumerationIterator")
            .field("exhausted", &self.enumeration.is_none())
            .finish()
    }
}

/// Adapts an enumeration into a standard iterator.
///
/// An absent enumeration yields an iterator that is already exhausted.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::adapt::{enumerate, to_iterator};
///
/// let collected: Vec<i32> = to_iterator(Some(enumerate(vec![1, 2, 3]))).collect();
/// assert_eq!(collected, vec![1, 2, 3]);
///
/// let mut iterator = to_iterator(Some(enumerate(vec![1])));
/// assert!(iterator.remove().is_err());
/// ```
#[must_use]
pub const fn to_iterator<E: Enumeration>(enumeration: Option<E>) -> EnumerationIterator<E> {
    EnumerationIterator { enumeration }
}

/// Returns `true` if the enumeration yields an element equal to `element`.
///
/// The enumeration is advanced until a match is found or it is exhausted.
/// An absent enumeration contains nothing.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::adapt::{contains_enumerated, enumerate};
///
/// assert!(contains_enumerated(Some(enumerate(["x", "y"])), &"y"));
/// assert!(!contains_enumerated(Some(enumerate(["x"])), &"y"));
/// ```
pub fn contains_enumerated<E, Q>(enumeration: Option<E>, element: &Q) -> bool
where
    E: Enumeration,
    E::Item: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    to_iterator(enumeration).any(|candidate| candidate.borrow() == element)
}

/// Drains an enumeration into a new vector, preserving order.
///
/// An absent enumeration gives an empty vector.
#[must_use]
pub fn enumeration_to_vec<E: Enumeration>(enumeration: Option<E>) -> Vec<E::Item> {
    to_iterator(enumeration).collect()
}
