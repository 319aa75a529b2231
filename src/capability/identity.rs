//! Reference identity, as opposed to value equality.
//!
//! [`contains_instance`](crate::query::contains_instance) and
//! [`has_unique_object`](crate::query::has_unique_object) care whether two
//! elements are the *same object*, not whether they compare equal. In Rust
//! that question only makes sense for handles: plain references, shared
//! pointers, and optional handles where two `None`s are the same "null".

use std::rc::Rc;
use std::sync::Arc;

/// Handles that can tell whether they point at the same object.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::capability::SameInstance;
/// use std::rc::Rc;
///
/// let first = Rc::new(String::from("token"));
/// let alias = Rc::clone(&first);
/// let copy = Rc::new(String::from("token"));
///
/// assert!(first.same_instance(&alias));
/// assert!(!first.same_instance(&copy));
/// ```
pub trait SameInstance {
    /// Returns `true` if `self` and `other` refer to the same object.
    fn same_instance(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SameInstance for &T {
    #[inline]
    fn same_instance(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> SameInstance for &mut T {
    #[inline]
    fn same_instance(&self, other: &Self) -> bool {
        std::ptr::eq(&**self, &**other)
    }
}

impl<T: ?Sized> SameInstance for Rc<T> {
    #[inline]
    fn same_instance(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameInstance for Arc<T> {
    #[inline]
    fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<H: SameInstance> SameInstance for Option<H> {
    #[inline]
    fn same_instance(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(left), Some(right)) => left.same_instance(right),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_equal_values_at_different_addresses_are_distinct() {
        let first = String::from("a");
        let second = String::from("a");
        assert!((&first).same_instance(&&first));
        assert!(!(&first).same_instance(&&second));
    }

    #[rstest]
    fn test_arc_identity() {
        let shared = Arc::new(5);
        assert!(shared.same_instance(&Arc::clone(&shared)));
        assert!(!shared.same_instance(&Arc::new(5)));
    }

    #[rstest]
    fn test_optional_handles() {
        let value = 1;
        assert!(None::<&i32>.same_instance(&None));
        assert!(!Some(&value).same_instance(&None));
        assert!(Some(&value).same_instance(&Some(&value)));
    }
}
