//! Cart store error type.

use cartstore_core::ProductId;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by [`CartStore`](crate::CartStore).
///
/// Quantity clamps and unknown IDs are not errors; those operations are
/// silent no-ops.
#[derive(Debug, Error)]
pub enum CartError {
    /// The key-value backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The persisted cart is not a valid list of cart lines.
    #[error("persisted cart is malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The persisted cart holds two lines for the same product.
    #[error("persisted cart holds more than one line for product {0}")]
    DuplicateLine(ProductId),

    /// The in-memory cart could not be encoded.
    #[error("failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CartError {
    /// Whether the error comes from unreadable persisted data rather than the backend.
    #[must_use]
    pub const fn is_corrupt(&self) -> bool {
        matches!(self, Self::Malformed(_) | Self::DuplicateLine(_))
    }
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;
