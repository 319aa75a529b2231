//! Read-only algorithms over collections that may be absent.
//!
//! Every function here accepts `Option` inputs and treats `None` as an
//! empty collection. Nothing in this module mutates its input or allocates
//! on behalf of the caller.
//!
//! | Function | Answers |
//! |----------|---------|
//! | [`contains`] | does a cursor yield an equal element? |
//! | [`contains_instance`] | does a collection hold this exact instance? |
//! | [`contains_any`] / [`find_first_match`] | do two collections intersect? |
//! | [`find_value_of_type`] / [`find_value_of_types`] | which element has this runtime type? |
//! | [`has_unique_object`] | is every element the same instance? |
//! | [`find_common_element_type`] | do all elements share a runtime type? |
//!
//! # Examples
//!
//! ```rust
//! use nullsafe_collections::query::{contains_any, find_common_element_type};
//! use std::any::{Any, TypeId};
//!
//! let granted = vec!["read", "write"];
//! assert!(contains_any(Some(&granted), Some(vec!["admin", "write"])));
//!
//! let claims: Vec<Box<dyn Any>> = vec![Box::new(1_i64), Box::new(2_i64)];
//! assert_eq!(find_common_element_type(Some(&claims)), Some(TypeId::of::<i64>()));
//! ```

mod classify;
mod search;

pub use classify::{
    find_common_element_type, find_value_of_type, find_value_of_types, has_unique_object,
};
pub use search::{contains, contains_any, contains_instance, find_first_match};
