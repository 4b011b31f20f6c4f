//! Bounded line quantity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The value lies outside `Quantity::MIN..=Quantity::MAX`.
    #[error("quantity must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Rejected value.
        value: i64,
        /// Smallest allowed quantity.
        min: u8,
        /// Largest allowed quantity.
        max: u8,
    },
}

/// Number of units of one product in the cart.
///
/// ## Constraints
///
/// - Never below [`Quantity::MIN`]; a line that would drop to zero is removed
///   explicitly instead
/// - Never above [`Quantity::MAX`]
///
/// ## Examples
///
/// ```
/// use cartstore_core::Quantity;
///
/// let q = Quantity::ONE;
/// assert_eq!(q.incremented().map(|q| q.get()), Some(2));
/// assert_eq!(q.decremented(), None);
///
/// assert!(Quantity::new(0).is_err());
/// assert!(Quantity::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(u8);

impl Quantity {
    /// Smallest quantity a cart line may hold.
    pub const MIN: u8 = 1;
    /// Largest quantity a cart line may hold.
    pub const MAX: u8 = 5;
    /// Quantity of a freshly added line.
    pub const ONE: Self = Self(Self::MIN);

    /// Create a quantity, checking the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::OutOfRange`] if `value` is outside
    /// `MIN..=MAX`.
    pub fn new(value: i64) -> Result<Self, QuantityError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(QuantityError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether no more units can be added.
    #[must_use]
    pub const fn is_max(self) -> bool {
        self.0 >= Self::MAX
    }

    /// Whether no more units can be taken away.
    #[must_use]
    pub const fn is_min(self) -> bool {
        self.0 <= Self::MIN
    }

    /// One more unit, or `None` at the upper bound.
    #[must_use]
    pub const fn incremented(self) -> Option<Self> {
        if self.is_max() {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    /// One less unit, or `None` at the lower bound.
    #[must_use]
    pub const fn decremented(self) -> Option<Self> {
        if self.is_min() {
            None
        } else {
            Some(Self(self.0 - 1))
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for i64 {
    fn from(quantity: Quantity) -> Self {
        Self::from(quantity.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
