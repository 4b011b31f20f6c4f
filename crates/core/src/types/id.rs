//! Newtype IDs for type-safe entity references.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
///
/// Cart lines reuse the product's ID, so a cart holds at most one line per
/// `ProductId`. Serialized as a bare JSON integer.
///
/// # Example
///
/// ```rust
/// # use cartstore_core::ProductId;
/// let id = ProductId::new(7);
/// assert_eq!(id.as_i64(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Create a new ID from an i64 value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ProductId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(i64::from(id))
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
