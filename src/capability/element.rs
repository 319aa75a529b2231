//! Runtime type inspection of container elements.
//!
//! The classification algorithms ([`find_value_of_type`],
//! [`find_common_element_type`]) work on heterogeneous containers whose
//! elements are type-erased. [`DynamicElement`] is how an element exposes
//! itself to them: as a `&dyn Any`, or as `None` when the element is the
//! null value.
//!
//! [`find_value_of_type`]: crate::query::find_value_of_type
//! [`find_common_element_type`]: crate::query::find_common_element_type

use std::any::{Any, TypeId};
use std::rc::Rc;
use std::sync::Arc;

/// Elements whose runtime type can be inspected.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::capability::DynamicElement;
/// use std::any::{Any, TypeId};
///
/// let boxed: Box<dyn Any> = Box::new(7_u8);
/// assert_eq!(boxed.element_type(), Some(TypeId::of::<u8>()));
///
/// let missing: Option<Box<dyn Any>> = None;
/// assert_eq!(missing.element_type(), None);
/// ```
pub trait DynamicElement {
    /// Returns the element as `&dyn Any`, or `None` for a null element.
    fn as_dynamic(&self) -> Option<&dyn Any>;

    /// Returns the runtime type of a non-null element.
    #[inline]
    fn element_type(&self) -> Option<TypeId> {
        self.as_dynamic().map(Any::type_id)
    }
}

impl DynamicElement for dyn Any {
    #[inline]
    fn as_dynamic(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl DynamicElement for dyn Any + Send {
    #[inline]
    fn as_dynamic(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl DynamicElement for dyn Any + Send + Sync {
    #[inline]
    fn as_dynamic(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl<E: DynamicElement + ?Sized> DynamicElement for &E {
    #[inline]
    fn as_dynamic(&self) -> Option<&dyn Any> {
        (**self).as_dynamic()
    }
}

impl<E: DynamicElement + ?Sized> DynamicElement for Box<E> {
    #[inline]
    fn as_dynamic(&self) -> Option<&dyn Any> {
        (**self).as_dynamic()
    }
}

impl<E: DynamicElement + ?Sized> DynamicElement for Rc<E> {
    #[inline]
    fn as_dynamic(&self) -> Option<&dyn Any> {
        (**self).as_dynamic()
    }
}

impl<E: DynamicElement + ?Sized> DynamicElement for Arc<E> {
    #[inline]
    fn as_dynamic(&self) -> Option<&dyn Any> {
        (**self).as_dynamic()
    }
}

impl<E: DynamicElement> DynamicElement for Option<E> {
    #[inline]
    fn as_dynamic(&self) -> Option<&dyn Any> {
        self.as_ref().and_then(DynamicElement::as_dynamic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_box_reports_inner_type_not_box_type() {
        let boxed: Box<dyn Any> = Box::new(String::from("x"));
        assert_eq!(boxed.element_type(), Some(TypeId::of::<String>()));
        assert_ne!(boxed.element_type(), Some(TypeId::of::<Box<dyn Any>>()));
    }

    #[rstest]
    fn test_shared_pointers_report_inner_type() {
        let shared: Rc<dyn Any> = Rc::new(1_i64);
        let atomic: Arc<dyn Any + Send + Sync> = Arc::new(1.5_f64);
        assert_eq!(shared.element_type(), Some(TypeId::of::<i64>()));
        assert_eq!(atomic.element_type(), Some(TypeId::of::<f64>()));
    }

    #[rstest]
    fn test_null_element_has_no_type() {
        let present: Option<Box<dyn Any>> = Some(Box::new(3_i32));
        let absent: Option<Box<dyn Any>> = None;
        assert_eq!(present.element_type(), Some(TypeId::of::<i32>()));
        assert!(absent.as_dynamic().is_none());
    }
}
