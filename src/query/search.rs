//! Containment and first-match searches.

use std::borrow::Borrow;

use crate::capability::{Membership, SameInstance};

/// Returns `true` if the cursor yields an element equal to `element`.
///
/// The cursor is advanced until a match is found or it is exhausted. An
/// absent cursor contains nothing. Null elements are modelled as `None`
/// and compare equal only to each other.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::query::contains;
///
/// assert!(contains(Some([1, 2, 3].iter()), &2));
/// assert!(!contains(None::<Vec<i32>>, &2));
///
/// let values = vec![Some("a"), None];
/// assert!(contains(Some(&values), &None));
/// ```
pub fn contains<I, E>(cursor: Option<I>, element: &E) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<E>,
    E: PartialEq + ?Sized,
{
    cursor.is_some_and(|cursor| {
        cursor
            .into_iter()
            .any(|candidate| candidate.borrow() == element)
    })
}

/// Returns `true` if the collection holds `element` itself, not merely an equal value.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::query::contains_instance;
///
/// let first = String::from("x");
/// let second = String::from("x");
/// let values = vec![&first];
///
/// assert!(contains_instance(Some(values.iter().copied()), &&first));
/// assert!(!contains_instance(Some(values.iter().copied()), &&second));
/// ```
pub fn contains_instance<I>(collection: Option<I>, element: &I::Item) -> bool
where
    I: IntoIterator,
    I::Item: SameInstance,
{
    collection.is_some_and(|collection| {
        collection
            .into_iter()
            .any(|candidate| candidate.same_instance(element))
    })
}

/// Returns `true` if any candidate is a member of `source`.
///
/// Uses `source`'s own membership test and stops at the first hit. An
/// absent or empty input on either side gives `false`.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::query::contains_any;
/// use std::collections::HashSet;
///
/// let source: HashSet<i32> = [1, 2, 3].into_iter().collect();
/// assert!(contains_any(Some(&source), Some(vec![4, 5, 2])));
/// assert!(!contains_any(Some(&source), Some(vec![4, 5])));
/// assert!(!contains_any::<HashSet<i32>, i32, Vec<i32>>(None, Some(vec![1])));
/// ```
pub fn contains_any<S, T, I>(source: Option<&S>, candidates: Option<I>) -> bool
where
    S: Membership<T> + ?Sized,
    T: ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    find_first_match(source, candidates).is_some()
}

/// Returns the first candidate, in candidate order, that is a member of `source`.
///
/// An absent or empty input on either side gives `None`.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::query::find_first_match;
/// use std::collections::BTreeSet;
///
/// let source: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(find_first_match(Some(&source), Some(vec![9, 2, 1])), Some(2));
/// ```
pub fn find_first_match<S, T, I>(source: Option<&S>, candidates: Option<I>) -> Option<I::Item>
where
    S: Membership<T> + ?Sized,
    T: ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    let source = source.filter(|source| !source.is_collection_empty())?;
    candidates?
        .into_iter()
        .find(|candidate| source.contains_member(candidate.borrow()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::rc::Rc;

    #[rstest]
    fn test_contains_stops_at_first_match() {
        let mut cursor = vec![1, 2, 3, 4].into_iter();
        assert!(contains(Some(cursor.by_ref()), &2));
        assert_eq!(cursor.next(), Some(3));
    }

    #[rstest]
    fn test_contains_exhausts_cursor_when_missing() {
        let mut cursor = vec![1, 2].into_iter();
        assert!(!contains(Some(cursor.by_ref()), &9));
        assert_eq!(cursor.next(), None);
    }

    #[rstest]
    fn test_contains_null_is_not_equal_to_value() {
        let values: Vec<Option<i32>> = vec![Some(0)];
        assert!(!contains(Some(&values), &None));
    }

    #[rstest]
    fn test_contains_instance_with_shared_pointers() {
        let shared = Rc::new(42);
        let values = vec![Rc::new(42), Rc::clone(&shared)];
        assert!(contains_instance(Some(values.iter().cloned()), &shared));
        assert!(!contains_instance(Some(values.iter().cloned()), &Rc::new(42)));
        assert!(!contains_instance(None::<Vec<Rc<i32>>>, &shared));
    }

    #[rstest]
    fn test_find_first_match_with_empty_source() {
        let source: Vec<i32> = Vec::new();
        assert_eq!(find_first_match(Some(&source), Some(vec![1])), None);
    }

    #[rstest]
    fn test_find_first_match_with_absent_candidates() {
        let source = vec![1];
        assert_eq!(find_first_match::<_, i32, Vec<i32>>(Some(&source), None), None);
    }

    #[rstest]
    fn test_contains_any_short_circuits() {
        let source = vec![1, 2, 3];
        let mut candidates = vec![0, 2, 3].into_iter();
        assert!(contains_any(Some(&source), Some(candidates.by_ref())));
        assert_eq!(candidates.next(), Some(3));
    }
}
