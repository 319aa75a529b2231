//! Immutable views and the operations that construct them.
//!
//! This module turns caller input that may be absent, a raw slice, or an
//! existing mutable container into read-only views:
//!
//! - [`ImmutableList`]: ordered, duplicates kept
//! - [`ImmutableSet`]: distinct elements in first-occurrence order
//! - [`ImmutableMap`]: unique keys to values
//! - [`ImmutableCollection`]: one of the element shapes, chosen by a
//!   [`Collection`] tag
//!
//! Every view has an allocation-free canonical empty instance, shares its
//! storage on `clone`, and rejects mutation attempted through
//! [`MutableCollection`](crate::capability::MutableCollection) or
//! [`MutableMapping`](crate::capability::MutableMapping) with
//! [`CollectionError::UnsupportedOperation`](crate::CollectionError).
//!
//! # Examples
//!
//! ```rust
//! use nullsafe_collections::view::{empty_set, list_of, null_safe, set_of, ImmutableSet};
//!
//! let list = list_of(Some(&[1, 2, 2]));
//! assert_eq!(list.len(), 3);
//!
//! let set = set_of(Some(&[1, 2, 2]));
//! assert_eq!(set.len(), 2);
//!
//! let missing: Option<ImmutableSet<i32>> = None;
//! assert_eq!(null_safe(missing), empty_set());
//! ```

// =============================================================================
// Index Hasher
// =============================================================================

/// Hasher for the position index of large sets.
#[cfg(feature = "fxhash")]
pub(crate) type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type IndexHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type IndexHasher = std::collections::hash_map::RandomState;

mod collection;
mod construct;
mod list;
mod map;
mod set;

pub use collection::{Collection, ImmutableCollection, ImmutableIterable, Shape};
pub use construct::{
    as_set, concat, empty_list, empty_map, empty_set, immutable, immutable_list, immutable_map,
    immutable_set, list_of, null_safe, null_safe_ref, set_of,
};
pub use list::ImmutableList;
pub use map::ImmutableMap;
pub use set::{ImmutableSet, SetBuilder};

#[cfg(feature = "arc")]
mod arc_send_sync_verification {
    use super::{ImmutableCollection, ImmutableList, ImmutableMap, ImmutableSet};

    static_assertions::assert_impl_all!(ImmutableList<i32>: Send, Sync);
    static_assertions::assert_impl_all!(ImmutableSet<String>: Send, Sync);
    static_assertions::assert_impl_all!(ImmutableMap<String, i32>: Send, Sync);
    static_assertions::assert_impl_all!(ImmutableCollection<i32>: Send, Sync);
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ImmutableList<i32>: Send, Sync);
