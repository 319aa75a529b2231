//! Shape-tagged containers.
//!
//! Which kind of view a wrapped container becomes is decided by an explicit
//! tag rather than by inspecting its type at runtime. Callers state the
//! shape once when building a [`Collection`]; [`immutable`] then maps each
//! input shape to the matching [`ImmutableCollection`] variant, and every
//! `match` over the variants is checked for exhaustiveness.
//!
//! [`immutable`]: crate::view::immutable

use std::collections::HashSet;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{ImmutableList, ImmutableSet};
use crate::CollectionError;
use crate::capability::{CanonicalEmpty, CollectionLength, Membership, MutableCollection};

/// The three container shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Ordered, duplicates allowed.
    Sequence,
    /// Distinct elements.
    Set,
    /// Unique keys to values.
    Mapping,
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sequence => "sequence",
            Self::Set => "set",
            Self::Mapping => "mapping",
        };
        formatter.write_str(name)
    }
}

/// A mutable input container tagged with its shape.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::view::{Collection, Shape};
/// use std::collections::HashSet;
///
/// let sequence: Collection<i32> = vec![1, 2].into();
/// assert_eq!(sequence.shape(), Shape::Sequence);
///
/// let set: Collection<i32> = HashSet::from([1, 2]).into();
/// assert_eq!(set.shape(), Shape::Set);
/// ```
pub enum Collection<T, S = RandomState> {
    /// An ordered sequence.
    Sequence(Vec<T>),
    /// A hash set.
    Set(HashSet<T, S>),
    /// Any other source of elements; only iteration is assumed.
    Iterable(Box<dyn Iterator<Item = T>>),
}

impl<T, S> Collection<T, S> {
    /// Tags an arbitrary iterable as a generic collection.
    pub fn iterable<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::Iterable(Box::new(elements.into_iter()))
    }

    /// Returns the shape of the view this container wraps into.
    ///
    /// A generic iterable wraps into a sequence-shaped view.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Sequence(_) | Self::Iterable(_) => Shape::Sequence,
            Self::Set(_) => Shape::Set,
        }
    }
}

impl<T, S> From<Vec<T>> for Collection<T, S> {
    fn from(elements: Vec<T>) -> Self {
        Self::Sequence(elements)
    }
}

impl<T, S> From<HashSet<T, S>> for Collection<T, S> {
    fn from(elements: HashSet<T, S>) -> Self {
        Self::Set(elements)
    }
}

impl<T: fmt::Debug, S> fmt::Debug for Collection<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(elements) => formatter.debug_tuple("Sequence").field(elements).finish(),
            Self::Set(elements) => formatter.debug_tuple("Set").field(elements).finish(),
            Self::Iterable(_) => formatter.write_str("Iterable(..)"),
        }
    }
}

// =============================================================================
// ImmutableIterable
// =============================================================================

/// A read-only view that only promises iteration, length and membership.
///
/// Unlike [`ImmutableList`] it offers no positional access.
pub struct ImmutableIterable<T> {
    elements: ImmutableList<T>,
}

impl<T> ImmutableIterable<T> {
    /// Returns the canonical empty iterable.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            elements: ImmutableList::empty(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements in source order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> FromIterator<T> for ImmutableIterable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Clone for ImmutableIterable<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableIterable<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ImmutableIterable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<'a, T> IntoIterator for &'a ImmutableIterable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// ImmutableCollection
// =============================================================================

/// A read-only view of one of the element-container shapes.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::view::{Collection, ImmutableCollection, Shape, immutable};
///
/// let view: ImmutableCollection<i32> = immutable(Some(Collection::<i32>::from(vec![2, 2, 1]))).unwrap();
/// assert_eq!(view.shape(), Shape::Sequence);
/// assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![2, 2, 1]);
/// ```
pub enum ImmutableCollection<T> {
    /// Wrapped sequence.
    Sequence(ImmutableList<T>),
    /// Wrapped set.
    Set(ImmutableSet<T>),
    /// Wrapped generic iterable.
    Iterable(ImmutableIterable<T>),
}

impl<T> ImmutableCollection<T> {
    /// Returns the shape of this view.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Sequence(_) | Self::Iterable(_) => Shape::Sequence,
            Self::Set(_) => Shape::Set,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(list) => list.len(),
            Self::Set(set) => set.len(),
            Self::Iterable(iterable) => iterable.len(),
        }
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::Sequence(list) => list.iter(),
            Self::Set(set) => set.iter(),
            Self::Iterable(iterable) => iterable.iter(),
        }
    }

    /// Returns the sequence view, if this is one.
    #[must_use]
    pub const fn as_list(&self) -> Option<&ImmutableList<T>> {
        match self {
            Self::Sequence(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the set view, if this is one.
    #[must_use]
    pub const fn as_set(&self) -> Option<&ImmutableSet<T>> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }
}

impl<T, S> From<Collection<T, S>> for ImmutableCollection<T>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn from(collection: Collection<T, S>) -> Self {
        match collection {
            Collection::Sequence(elements) => Self::Sequence(ImmutableList::from_vec(elements)),
            Collection::Set(elements) => Self::Set(elements.into_iter().collect()),
            Collection::Iterable(elements) => Self::Iterable(elements.collect()),
        }
    }
}

impl<T> Clone for ImmutableCollection<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Sequence(list) => Self::Sequence(list.clone()),
            Self::Set(set) => Self::Set(set.clone()),
            Self::Iterable(iterable) => Self::Iterable(iterable.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableCollection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(list) => formatter.debug_tuple("Sequence").field(list).finish(),
            Self::Set(set) => formatter.debug_tuple("Set").field(set).finish(),
            Self::Iterable(iterable) => formatter.debug_tuple("Iterable").field(iterable).finish(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ImmutableCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Capabilities
// =============================================================================

impl<T> CollectionLength for ImmutableIterable<T> {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq> Membership<T> for ImmutableIterable<T> {
    fn contains_member(&self, element: &T) -> bool {
        self.elements.contains_member(element)
    }
}

impl<T> CanonicalEmpty for ImmutableIterable<T> {
    fn canonical_empty() -> Self {
        Self::empty()
    }
}

impl<T> CollectionLength for ImmutableCollection<T> {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

impl<T: Eq + Hash> Membership<T> for ImmutableCollection<T> {
    fn contains_member(&self, element: &T) -> bool {
        match self {
            Self::Sequence(list) => list.contains_member(element),
            Self::Set(set) => set.contains(element),
            Self::Iterable(iterable) => iterable.contains_member(element),
        }
    }
}

impl<T> MutableCollection<T> for ImmutableIterable<T> {
    fn try_add(&mut self, _element: T) -> Result<bool, CollectionError> {
        Err(CollectionError::unsupported("add", "ImmutableIterable"))
    }

    fn try_add_all<I>(&mut self, _elements: I) -> Result<usize, CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        Err(CollectionError::unsupported("add_all", "ImmutableIterable"))
    }

    fn try_remove(&mut self, _element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        Err(CollectionError::unsupported("remove", "ImmutableIterable"))
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        Err(CollectionError::unsupported("clear", "ImmutableIterable"))
    }
}

impl<T> MutableCollection<T> for ImmutableCollection<T> {
    fn try_add(&mut self, element: T) -> Result<bool, CollectionError> {
        match self {
            Self::Sequence(list) => list.try_add(element),
            Self::Set(set) => set.try_add(element),
            Self::Iterable(iterable) => iterable.try_add(element),
        }
    }

    fn try_add_all<I>(&mut self, elements: I) -> Result<usize, CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        match self {
            Self::Sequence(list) => list.try_add_all(elements),
            Self::Set(set) => set.try_add_all(elements),
            Self::Iterable(iterable) => iterable.try_add_all(elements),
        }
    }

    fn try_remove(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        match self {
            Self::Sequence(list) => list.try_remove(element),
            Self::Set(set) => set.try_remove(element),
            Self::Iterable(iterable) => iterable.try_remove(element),
        }
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        match self {
            Self::Sequence(list) => list.try_clear(),
            Self::Set(set) => set.try_clear(),
            Self::Iterable(iterable) => iterable.try_clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_set_input_becomes_set_view() {
        let input: HashSet<i32> = [1, 2, 3].into_iter().collect();
        let view = ImmutableCollection::from(Collection::from(input));
        assert_eq!(view.shape(), Shape::Set);
        assert_eq!(view.len(), 3);
        assert!(view.as_set().is_some());
        assert!(view.as_list().is_none());
    }

    #[rstest]
    fn test_iterable_input_keeps_source_order() {
        let view: ImmutableCollection<i32> =
            ImmutableCollection::from(Collection::<i32>::iterable(vec![3, 3, 1]));
        assert!(matches!(view, ImmutableCollection::Iterable(_)));
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![3, 3, 1]);
        assert!(view.contains_member(&1));
    }

    #[rstest]
    fn test_every_variant_rejects_mutation() {
        let mut views: Vec<ImmutableCollection<i32>> = vec![
            ImmutableCollection::from(Collection::<i32>::from(vec![1])),
            ImmutableCollection::from(Collection::<i32>::from(HashSet::from([1]))),
            ImmutableCollection::from(Collection::<i32>::iterable([1])),
        ];
        for view in &mut views {
            assert!(view.try_add(2).unwrap_err().is_unsupported_operation());
            assert!(
                view.try_add_all(Vec::new())
                    .unwrap_err()
                    .is_unsupported_operation()
            );
            assert!(view.try_remove(&1).is_err());
            assert!(view.try_clear().is_err());
            assert_eq!(view.len(), 1);
        }
    }

    #[rstest]
    fn test_shape_display() {
        assert_eq!(Shape::Mapping.to_string(), "mapping");
        assert_eq!(
            Collection::<i32>::iterable(0..3).shape().to_string(),
            "sequence"
        );
    }
}
