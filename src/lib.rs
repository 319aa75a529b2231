//! # nullsafe-collections
//!
//! Null-safe, immutable views over standard collections, and read-only
//! search and classification algorithms that accept absent input.
//!
//! ## Overview
//!
//! Callers often hold a collection that might not be there. This library
//! models that as `Option` everywhere and gives every operation a
//! well-defined answer for `None`:
//!
//! - **Views**: `ImmutableList`, `ImmutableSet`, `ImmutableMap` with
//!   allocation-free canonical empties and shared storage
//! - **Queries**: containment, intersection, unique-instance and
//!   runtime-type classification over any iterable
//! - **Adapters**: array widening, legacy enumerations, a property store
//!   with defaults, and fallible merges into mutable targets
//! - **Capabilities**: the small traits the algorithms are written against
//!
//! Absence is data, not an error. The only errors are an absent merge
//! target and a mutation attempt through a read-only handle, both reported
//! as [`CollectionError`].
//!
//! ## Feature Flags
//!
//! - `view`: immutable views and their constructors
//! - `query`: search and classification algorithms
//! - `adapt`: arrays, enumerations, properties, merges
//! - `tracing`: trace-level events from merges and set construction
//! - `arc`: use `Arc` for shared storage, making views `Send + Sync`
//! - `fxhash` / `ahash`: faster hasher for the index of large sets
//! - `full`: enable all of the above except the hasher choice
//!
//! ## Example
//!
//! ```rust
//! use nullsafe_collections::prelude::*;
//!
//! let granted = set_of(Some(&[7_u16, 3, 7]));
//! assert_eq!(granted.len(), 2);
//!
//! assert!(contains_any(Some(&granted), Some(vec![1_u16, 3])));
//! assert!(!contains_any(Some(&granted), None::<Vec<u16>>));
//! assert_eq!(size(Some(&granted)), 2);
//! assert_eq!(size::<ImmutableSet<u16>>(None), 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
#[cfg(any(feature = "view", feature = "adapt"))]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($argument)*);
    };
}

#[cfg(any(feature = "view", feature = "adapt"))]
pub(crate) use trace_event;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted pointer for shared, read-only storage.
///
/// With the `arc` feature this is `std::sync::Arc`; otherwise it is
/// `std::rc::Rc`.
#[cfg(all(feature = "arc", any(feature = "view", feature = "adapt")))]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(all(not(feature = "arc"), any(feature = "view", feature = "adapt")))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Prelude module for convenient imports.
///
/// Re-exports the error type, the capability traits and every enabled
/// subsystem.
///
/// # Usage
///
/// ```rust
/// use nullsafe_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::CollectionError;
    pub use crate::capability::*;

    #[cfg(feature = "view")]
    pub use crate::view::*;

    #[cfg(feature = "query")]
    pub use crate::query::*;

    #[cfg(feature = "adapt")]
    pub use crate::adapt::*;
}

pub mod capability;
pub mod error;

pub use error::CollectionError;

#[cfg(feature = "view")]
pub mod view;

#[cfg(feature = "query")]
pub mod query;

#[cfg(feature = "adapt")]
pub mod adapt;
