//! Bridges from foreign iteration shapes into standard collections.
//!
//! - [`arrays`]: array-like values that may be absent
//! - [`Enumeration`]: legacy "has more / next" cursors, and
//!   [`to_iterator`] / [`enumerate`] to convert in either direction
//! - [`Properties`]: a string-keyed store with chained defaults
//! - [`merge_array_into`] / [`merge_properties_into`]: drain a source into
//!   a caller-supplied [`MutableCollection`](crate::capability::MutableCollection)
//!   or [`MutableMapping`](crate::capability::MutableMapping)
//!
//! # Examples
//!
//! ```rust
//! use nullsafe_collections::adapt::{enumerate, merge_array_into, to_iterator};
//! use std::collections::BTreeSet;
//!
//! let mut scopes = BTreeSet::new();
//! merge_array_into(Some(&["read", "write", "read"]), Some(&mut scopes)).unwrap();
//!
//! let drained: Vec<&str> = to_iterator(Some(enumerate(&scopes))).copied().collect();
//! assert_eq!(drained, vec!["read", "write"]);
//! ```

pub mod arrays;
mod enumeration;
mod merge;
mod properties;

pub use arrays::array_to_list;
pub use enumeration::{
    Enumeration, EnumerationIterator, IteratorEnumeration, contains_enumerated, enumerate,
    enumeration_to_vec, to_iterator,
};
pub use merge::{merge_array_into, merge_properties_into};
pub use properties::{Properties, PropertyNames, PropertyValue};
