//! Error type shared by every fallible operation in this crate.
//!
//! Only two things can go wrong:
//!
//! - a caller passes `None` where an operation requires a target it will
//!   write into ([`CollectionError::InvalidArgument`]), and
//! - a caller tries to mutate something that only projects data, such as
//!   an immutable view or an enumeration adapter
//!   ([`CollectionError::UnsupportedOperation`]).
//!
//! Absent containers, missing matches and ambiguous matches are ordinary
//! return values (`false`, `None`, an empty view) and never produce an
//! error.
//!
//! # Examples
//!
//! ```rust
//! use nullsafe_collections::CollectionError;
//!
//! let error = CollectionError::InvalidArgument { argument: "collection" };
//! assert_eq!(format!("{error}"), "collection must not be absent");
//!
//! let error = CollectionError::UnsupportedOperation {
//!     operation: "add",
//!     target: "ImmutableList",
//! };
//! assert_eq!(format!("{error}"), "add is not supported by ImmutableList");
//! ```

use thiserror::Error;

/// Errors raised synchronously by merge operations and mutation attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CollectionError {
    /// A required target was absent. Raised before any element is written.
    #[error("{argument} must not be absent")]
    InvalidArgument {
        /// The name of the missing argument.
        argument: &'static str,
    },

    /// A structural mutation was attempted through a read-only handle.
    #[error("{operation} is not supported by {target}")]
    UnsupportedOperation {
        /// The rejected operation, e.g. `"add"` or `"remove"`.
        operation: &'static str,
        /// The type that rejected it.
        target: &'static str,
    },
}

impl CollectionError {
    /// Shorthand for [`CollectionError::InvalidArgument`].
    #[inline]
    #[must_use]
    pub const fn invalid_argument(argument: &'static str) -> Self {
        Self::InvalidArgument { argument }
    }

    /// Shorthand for [`CollectionError::UnsupportedOperation`].
    #[inline]
    #[must_use]
    pub const fn unsupported(operation: &'static str, target: &'static str) -> Self {
        Self::UnsupportedOperation { operation, target }
    }

    /// Returns `true` for [`CollectionError::InvalidArgument`].
    #[inline]
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` for [`CollectionError::UnsupportedOperation`].
    #[inline]
    #[must_use]
    pub const fn is_unsupported_operation(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_argument_display() {
        let error = CollectionError::invalid_argument("map");
        assert_eq!(format!("{error}"), "map must not be absent");
        assert!(error.is_invalid_argument());
        assert!(!error.is_unsupported_operation());
    }

    #[rstest]
    fn test_unsupported_operation_display() {
        let error = CollectionError::unsupported("remove", "EnumerationIterator");
        assert_eq!(
            format!("{error}"),
            "remove is not supported by EnumerationIterator"
        );
        assert!(error.is_unsupported_operation());
    }

    #[rstest]
    fn test_error_source_is_none() {
        use std::error::Error;

        let error = CollectionError::invalid_argument("collection");
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_error_equality() {
        assert_eq!(
            CollectionError::unsupported("add", "ImmutableSet"),
            CollectionError::UnsupportedOperation {
                operation: "add",
                target: "ImmutableSet",
            }
        );
        assert_ne!(
            CollectionError::invalid_argument("map"),
            CollectionError::invalid_argument("collection")
        );
    }
}
