//! Container capabilities.
//!
//! The algorithms in this crate never ask for a concrete container type.
//! They ask for the smallest capability they need:
//!
//! - [`CollectionLength`]: how many elements are there?
//! - [`Membership`]: is this element present?
//! - [`SameInstance`]: are these two handles the same object?
//! - [`DynamicElement`]: what is this element's runtime type?
//! - [`MutableCollection`] / [`MutableMapping`]: may I change this?
//! - [`CanonicalEmpty`]: what does "nothing" look like for this type?
//!
//! Iteration is Rust's own [`IntoIterator`], which already is the
//! forward-only, single-pass capability the algorithms need.
//!
//! Std containers implement all applicable traits, as do the views in
//! [`view`](crate::view).

mod element;
mod empty;
mod identity;
mod length;
mod membership;
mod mutation;

pub use element::DynamicElement;
pub use empty::CanonicalEmpty;
pub use identity::SameInstance;
pub use length::{CollectionLength, is_empty, size};
pub use membership::Membership;
pub use mutation::{MutableCollection, MutableMapping};
