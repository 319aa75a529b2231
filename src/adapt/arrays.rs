//! Null-safe normalization of array-like values.
//!
//! An "array" here is anything that can be viewed as a slice: fixed-size
//! arrays, slices, `Vec`, boxed slices. Absent arrays behave like empty
//! ones.

/// Returns the number of elements in `array`, or 0 when it is absent.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::adapt::arrays;
///
/// assert_eq!(arrays::length(Some(&[1, 2, 3])), 3);
/// assert_eq!(arrays::length::<i32, [i32]>(None), 0);
/// ```
#[inline]
#[must_use]
pub fn length<T, A>(array: Option<&A>) -> usize
where
    A: AsRef<[T]> + ?Sized,
{
    array.map_or(0, |array| array.as_ref().len())
}

/// Widens an array-like value into an owned, growable sequence.
///
/// The result is always a fresh `Vec`: later changes to `array` do not
/// show through it. An absent array gives an empty `Vec`.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::adapt::array_to_list;
///
/// let widened = array_to_list(Some(&[1_u8, 2, 3]));
/// assert_eq!(widened, vec![1, 2, 3]);
///
/// assert!(array_to_list::<u8, [u8]>(None).is_empty());
/// ```
#[must_use]
pub fn array_to_list<T, A>(array: Option<&A>) -> Vec<T>
where
    T: Clone,
    A: AsRef<[T]> + ?Sized,
{
    array.map_or_else(Vec::new, |array| array.as_ref().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(vec![]), 0)]
    #[case(Some(vec![7]), 1)]
    #[case(Some(vec![7, 7, 7]), 3)]
    #[case(None, 0)]
    fn test_length(#[case] array: Option<Vec<i64>>, #[case] expected: usize) {
        assert_eq!(length(array.as_ref()), expected);
    }

    #[rstest]
    fn test_array_to_list_copies() {
        let mut source = vec![String::from("a"), String::from("b")];
        let widened = array_to_list(Some(&source));
        source[0].push('!');
        assert_eq!(widened, vec!["a", "b"]);
    }

    #[rstest]
    fn test_array_to_list_from_boxed_slice() {
        let boxed: Box<[char]> = vec!['x', 'y'].into_boxed_slice();
        assert_eq!(array_to_list(Some(&boxed)), vec!['x', 'y']);
    }
}
