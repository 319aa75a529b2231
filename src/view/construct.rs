//! View construction: normalizing possibly-absent input into views.
//!
//! Four families of constructors live here, and they deliberately treat
//! absence differently:
//!
//! | Family                          | `None` input          | Present input                    |
//! |---------------------------------|-----------------------|----------------------------------|
//! | `empty_*`                       | n/a                   | canonical empty view             |
//! | `list_of`, `set_of`, `as_set`   | canonical empty view  | view over a private copy         |
//! | `immutable*`                    | `None`                | view that takes over the input   |
//! | `null_safe`, `null_safe_ref`    | canonical empty value | the input itself, unchanged      |
//!
//! `immutable*` is the only family that propagates absence, so callers can
//! still tell "nothing was given" from "an empty container was given".
//!
//! # Ownership
//!
//! The literal constructors clone from the caller's slice, so later changes
//! to that slice are never visible through the view. The `immutable*`
//! constructors take the container by value instead: no element is cloned,
//! and since the caller gives up its handle, nothing can mutate the
//! elements behind the view's back.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use super::{Collection, ImmutableCollection, ImmutableList, ImmutableMap, ImmutableSet, SetBuilder};
use crate::capability::CanonicalEmpty;

// =============================================================================
// Canonical empties
// =============================================================================

/// Returns the canonical empty list.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::view::empty_list;
///
/// let first = empty_list::<i32>();
/// let second = empty_list::<i32>();
/// assert!(first.is_empty());
/// assert!(first.shares_storage_with(&second));
/// ```
#[inline]
#[must_use]
pub const fn empty_list<T>() -> ImmutableList<T> {
    ImmutableList::empty()
}

/// Returns the canonical empty set.
#[inline]
#[must_use]
pub const fn empty_set<T>() -> ImmutableSet<T> {
    ImmutableSet::empty()
}

/// Returns the canonical empty map.
#[inline]
#[must_use]
pub const fn empty_map<K, V>() -> ImmutableMap<K, V> {
    ImmutableMap::empty()
}

// =============================================================================
// Literal constructors
// =============================================================================

/// Returns an immutable list holding a copy of `elements`, in order.
///
/// Absent or empty input yields the canonical empty list. Duplicates are
/// kept.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::view::list_of;
///
/// let mut source = vec!["b", "a", "b"];
/// let list = list_of(Some(&source));
/// source[0] = "z";
///
/// assert_eq!(list.as_slice(), &["b", "a", "b"]);
/// assert!(list_of::<i32, [i32]>(None).is_empty());
/// ```
#[must_use]
pub fn list_of<T, A>(elements: Option<&A>) -> ImmutableList<T>
where
    T: Clone,
    A: AsRef<[T]> + ?Sized,
{
    elements.map_or_else(ImmutableList::empty, |elements| {
        ImmutableList::from_vec(elements.as_ref().to_vec())
    })
}

/// Returns an immutable set of the distinct `elements`, in first-occurrence order.
///
/// Absent or empty input yields the canonical empty set.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::view::set_of;
///
/// let set = set_of(Some(&['a', 'b', 'a', 'c']));
/// assert_eq!(set.as_slice(), &['a', 'b', 'c']);
/// ```
#[must_use]
pub fn set_of<T, A>(elements: Option<&A>) -> ImmutableSet<T>
where
    T: Clone + Eq + Hash,
    A: AsRef<[T]> + ?Sized,
{
    elements.map_or_else(ImmutableSet::empty, |elements| {
        elements.as_ref().iter().cloned().collect()
    })
}

/// Returns an immutable set of the distinct elements of `collection`.
///
/// Absent or empty input yields the canonical empty set. Elements keep the
/// collection's iteration order, first occurrence winning.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::view::as_set;
///
/// let set = as_set(Some(vec![3, 1, 3, 2]));
/// assert_eq!(set.as_slice(), &[3, 1, 2]);
/// assert!(as_set::<Vec<i32>>(None).is_empty());
/// ```
#[must_use]
pub fn as_set<C>(collection: Option<C>) -> ImmutableSet<C::Item>
where
    C: IntoIterator,
    C::Item: Eq + Hash,
{
    collection.map_or_else(ImmutableSet::empty, |collection| {
        collection.into_iter().collect()
    })
}

/// Returns a new set with `set`'s elements followed by `elements`.
///
/// Duplicates against the union collapse to their first occurrence. The
/// input set is not modified; an absent set counts as empty.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::view::{concat, set_of};
///
/// let base = set_of(Some(&["alg", "typ"]));
/// let extended = concat(Some(&base), Some(&["kid", "alg"]));
///
/// assert_eq!(extended.as_slice(), &["alg", "typ", "kid"]);
/// assert_eq!(base.len(), 2);
/// ```
#[must_use]
pub fn concat<'a, T, I, A>(set: Option<I>, elements: Option<&A>) -> ImmutableSet<T>
where
    T: Clone + Eq + Hash + 'a,
    I: IntoIterator<Item = &'a T>,
    A: AsRef<[T]> + ?Sized,
{
    let set = set.map(IntoIterator::into_iter);
    let existing = set.as_ref().map_or(0, |iter| iter.size_hint().0);
    let appended: &[T] = elements.map_or(&[][..], <A as AsRef<[T]>>::as_ref);

    let mut builder = SetBuilder::with_capacity(existing + appended.len());
    if let Some(set) = set {
        builder.extend(set.cloned());
    }
    builder.extend(appended.iter().cloned());
    crate::trace_event!(
        appended = appended.len(),
        len = builder.len(),
        "concatenated set"
    );
    builder.build()
}

// =============================================================================
// Wrapping constructors
// =============================================================================

/// Wraps a shape-tagged container in the matching immutable view.
///
/// Returns `None` for `None`. Elements are moved, never cloned.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::view::{Collection, Shape, immutable};
/// use std::collections::HashSet;
///
/// assert!(immutable::<i32, _>(None::<Collection<i32>>).is_none());
///
/// let view = immutable(Some(Collection::from(HashSet::from([1, 2])))).unwrap();
/// assert_eq!(view.shape(), Shape::Set);
/// ```
#[must_use]
pub fn immutable<T, S>(collection: Option<Collection<T, S>>) -> Option<ImmutableCollection<T>>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    collection.map(ImmutableCollection::from)
}

/// Wraps a vector in an [`ImmutableList`], or returns `None` for `None`.
#[must_use]
pub fn immutable_list<T>(list: Option<Vec<T>>) -> Option<ImmutableList<T>> {
    list.map(ImmutableList::from_vec)
}

/// Wraps a hash set in an [`ImmutableSet`], or returns `None` for `None`.
///
/// The view iterates in the order the hash set iterated.
#[must_use]
pub fn immutable_set<T, S>(set: Option<HashSet<T, S>>) -> Option<ImmutableSet<T>>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    set.map(|set| set.into_iter().collect())
}

/// Wraps a hash map in an [`ImmutableMap`], or returns `None` for `None`.
#[must_use]
pub fn immutable_map<K, V, S>(map: Option<HashMap<K, V, S>>) -> Option<ImmutableMap<K, V, S>> {
    map.map(ImmutableMap::from_map)
}

// =============================================================================
// Null-safe accessors
// =============================================================================

/// Returns `container`, or the canonical empty instance if it is absent.
///
/// Present input is returned as-is; it is not made immutable.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::view::{ImmutableSet, null_safe};
///
/// let set: ImmutableSet<i32> = null_safe(None);
/// assert!(set.is_empty());
///
/// let values = null_safe(Some(vec![1, 2]));
/// assert_eq!(values, vec![1, 2]);
///
/// let slice: &[u8] = null_safe(None);
/// assert!(slice.is_empty());
/// ```
#[inline]
#[must_use]
pub fn null_safe<C: CanonicalEmpty>(container: Option<C>) -> C {
    container.unwrap_or_else(C::canonical_empty)
}

/// Borrows `container`, or yields an owned canonical empty instance if it is absent.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::view::null_safe_ref;
/// use std::borrow::Cow;
/// use std::collections::HashSet;
///
/// let present: HashSet<i32> = HashSet::from([1]);
/// assert!(matches!(null_safe_ref(Some(&present)), Cow::Borrowed(_)));
///
/// let absent = null_safe_ref::<HashSet<i32>>(None);
/// assert!(absent.is_empty());
/// ```
#[inline]
#[must_use]
pub fn null_safe_ref<C>(container: Option<&C>) -> Cow<'_, C>
where
    C: ToOwned + ?Sized,
    C::Owned: CanonicalEmpty,
{
    container.map_or_else(|| Cow::Owned(C::Owned::canonical_empty()), Cow::Borrowed)
}

// =============================================================================
// Literal macros
// =============================================================================

/// Builds an [`ImmutableList`](crate::view::ImmutableList) from literal elements.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::list_of;
///
/// let list = list_of![1, 1, 2];
/// assert_eq!(list.as_slice(), &[1, 1, 2]);
///
/// let empty: nullsafe_collections::view::ImmutableList<i32> = list_of![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list_of {
    () => {
        $crate::view::ImmutableList::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::view::ImmutableList::from_vec(::std::vec![$($element),+])
    };
}

/// Builds an [`ImmutableSet`](crate::view::ImmutableSet) from literal elements.
///
/// Duplicates collapse to their first occurrence.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::set_of;
///
/// let set = set_of!["a", "b", "a", "c"];
/// assert_eq!(set.as_slice(), &["a", "b", "c"]);
/// ```
#[macro_export]
macro_rules! set_of {
    () => {
        $crate::view::ImmutableSet::empty()
    };
    ($($element:expr),+ $(,)?) => {
        <$crate::view::ImmutableSet<_> as ::core::iter::FromIterator<_>>::from_iter([$($element),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_list_of_empty_slice_is_canonical() {
        let list = list_of::<i32, [i32]>(Some(&[]));
        assert!(list.shares_storage_with(&empty_list()));
    }

    #[rstest]
    fn test_set_of_absent_is_canonical() {
        let set = set_of::<i32, [i32]>(None);
        assert!(set.shares_storage_with(&empty_set()));
    }

    #[rstest]
    fn test_concat_with_absent_set() {
        let set = concat::<i32, &ImmutableSet<i32>, _>(None, Some(&[2, 1, 2]));
        assert_eq!(set.as_slice(), &[2, 1]);
    }

    #[rstest]
    fn test_concat_with_absent_elements() {
        let base = set_of(Some(&[1, 2]));
        let result = concat::<i32, _, [i32]>(Some(&base), None);
        assert_eq!(result, base);
        assert!(!result.shares_storage_with(&base));
    }

    #[rstest]
    fn test_concat_of_two_absent_inputs_is_empty() {
        let result = concat::<i32, &ImmutableSet<i32>, [i32]>(None, None);
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_concat_accepts_std_sets() {
        let base: std::collections::BTreeSet<i32> = [3, 1].into_iter().collect();
        let result = concat(Some(&base), Some(&[2, 3]));
        assert_eq!(result.as_slice(), &[1, 3, 2]);
    }

    #[rstest]
    fn test_immutable_list_distinguishes_absent_from_empty() {
        assert!(immutable_list::<i32>(None).is_none());
        let empty = immutable_list(Some(Vec::<i32>::new()));
        assert!(empty.is_some_and(|list| list.is_empty()));
    }

    #[rstest]
    fn test_immutable_map_moves_entries() {
        let map: HashMap<&str, i32> = [("a", 1)].into_iter().collect();
        let view = immutable_map(Some(map));
        assert_eq!(view.and_then(|view| view.get("a").copied()), Some(1));
        assert!(immutable_map::<&str, i32, std::collections::hash_map::RandomState>(None).is_none());
    }

    #[rstest]
    fn test_null_safe_ref_borrows_present_input() {
        let values = vec![1, 2, 3];
        let cow = null_safe_ref(Some(&values));
        assert!(matches!(cow, Cow::Borrowed(borrowed) if std::ptr::eq(borrowed, &values)));
    }

    #[rstest]
    fn test_macros() {
        let list = crate::list_of!["x", "y", "x"];
        let set = crate::set_of!["x", "y", "x"];
        assert_eq!(list.len(), 3);
        assert_eq!(set.len(), 2);
    }
}
