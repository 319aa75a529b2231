//! Classification of heterogeneous containers by runtime element type.
//!
//! Elements are inspected through [`DynamicElement`]. Null elements
//! (`None`) never match a type and never take part in the common-type
//! computation.

use std::any::{Any, TypeId};

use crate::capability::{DynamicElement, SameInstance};

/// Returns the single element whose runtime type is exactly `T`.
///
/// Zero matches, or more than one, give `None`. Matching is exact: there
/// is no subtyping between Rust types.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::query::find_value_of_type;
/// use std::any::Any;
///
/// let values: Vec<Box<dyn Any>> = vec![Box::new("a"), Box::new(1_i32), Box::new("b")];
///
/// assert_eq!(find_value_of_type::<i32, _, _>(Some(&values)), Some(&1));
/// assert_eq!(find_value_of_type::<&str, _, _>(Some(&values)), None);
/// assert_eq!(find_value_of_type::<f64, _, _>(Some(&values)), None);
/// ```
#[must_use]
pub fn find_value_of_type<'a, T, I, E>(collection: Option<I>) -> Option<&'a T>
where
    T: Any,
    I: IntoIterator<Item = &'a E>,
    E: DynamicElement + ?Sized + 'a,
{
    unique_match(collection?, TypeId::of::<T>()).and_then(<dyn Any>::downcast_ref::<T>)
}

/// Tries each type in order and returns the first unique value found.
///
/// For every entry of `types` the whole collection is scanned; the first
/// type with exactly one matching element wins. An empty collection or an
/// empty type list gives `None`.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::query::find_value_of_types;
/// use std::any::{Any, TypeId};
///
/// let values: Vec<Box<dyn Any>> = vec![Box::new(1_i32), Box::new(2_i32), Box::new(3_u8)];
/// let types = [TypeId::of::<i32>(), TypeId::of::<u8>()];
///
/// let found = find_value_of_types(Some(&values), &types);
/// assert_eq!(found.and_then(|value| value.downcast_ref::<u8>()), Some(&3));
/// ```
#[must_use]
pub fn find_value_of_types<'a, I, E>(collection: Option<I>, types: &[TypeId]) -> Option<&'a dyn Any>
where
    I: IntoIterator<Item = &'a E> + Clone,
    E: DynamicElement + ?Sized + 'a,
{
    let collection = collection?;
    types
        .iter()
        .find_map(|type_id| unique_match(collection.clone(), *type_id))
}

/// Returns `true` if every element is the same instance as the first.
///
/// An absent or empty collection gives `false`. Two null elements count
/// as the same instance.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::query::has_unique_object;
/// use std::rc::Rc;
///
/// let shared = Rc::new(String::from("x"));
/// let repeated = vec![Rc::clone(&shared), Rc::clone(&shared)];
/// assert!(has_unique_object(Some(repeated)));
///
/// let distinct = vec![Rc::new(String::from("x")), Rc::new(String::from("x"))];
/// assert!(!has_unique_object(Some(distinct)));
/// ```
pub fn has_unique_object<I>(collection: Option<I>) -> bool
where
    I: IntoIterator,
    I::Item: SameInstance,
{
    let Some(collection) = collection else {
        return false;
    };
    let mut elements = collection.into_iter();
    let Some(candidate) = elements.next() else {
        return false;
    };
    elements.all(|element| element.same_instance(&candidate))
}

/// Returns the runtime type shared by every non-null element.
///
/// Gives `None` when the collection is absent, holds only nulls, or mixes
/// types.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::query::find_common_element_type;
/// use std::any::{Any, TypeId};
///
/// let values: Vec<Option<Box<dyn Any>>> = vec![Some(Box::new(1_i32)), None, Some(Box::new(2_i32))];
/// assert_eq!(find_common_element_type(Some(&values)), Some(TypeId::of::<i32>()));
///
/// let mixed: Vec<Box<dyn Any>> = vec![Box::new(1_i32), Box::new("a")];
/// assert_eq!(find_common_element_type(Some(&mixed)), None);
/// ```
pub fn find_common_element_type<I>(collection: Option<I>) -> Option<TypeId>
where
    I: IntoIterator,
    I::Item: DynamicElement,
{
    let mut common = None;
    for element_type in collection?.into_iter().filter_map(|element| element.element_type()) {
        match common {
            None => common = Some(element_type),
            Some(candidate) if candidate != element_type => return None,
            Some(_) => {}
        }
    }
    common
}

/// Returns the only element of runtime type `type_id`, if exactly one exists.
fn unique_match<'a, I, E>(collection: I, type_id: TypeId) -> Option<&'a dyn Any>
where
    I: IntoIterator<Item = &'a E>,
    E: DynamicElement + ?Sized + 'a,
{
    let mut found = None;
    for value in collection.into_iter().filter_map(DynamicElement::as_dynamic) {
        if value.type_id() == type_id {
            if found.is_some() {
                return None;
            }
            found = Some(value);
        }
    }
    found
}
