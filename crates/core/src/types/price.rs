//! Type-safe price representation using decimal arithmetic.
//!
//! Prices travel as plain JSON numbers (`"price": 299`) so that carts written
//! by other storefront clients load unchanged. Internally they are
//! [`Decimal`]s, which keeps `quantity * price` sums exact.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::{self, Visitor};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Quantity;

/// A unit or line price in the store's currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in cents (e.g. `1999` is `19.99`).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Self {
        Self(self.0 * Decimal::from(quantity.get()))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl From<i32> for Price {
    fn from(amount: i32) -> Self {
        Self(Decimal::from(amount))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Formats as `$19.99`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract().is_zero() {
            if let Some(whole) = self.0.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }
        let float = self
            .0
            .to_f64()
            .ok_or_else(|| S::Error::custom(format!("price {} is not representable", self.0)))?;
        serializer.serialize_f64(float)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

/// Accepts JSON numbers as well as decimal strings.
struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a decimal string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        // Shortest round-trip form, so 19.99 stays 19.99 rather than its binary expansion.
        self.visit_str(&v.to_string())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Decimal::from_str(v.trim())
            .map(Price)
            .map_err(|e| E::custom(format!("invalid price {v:?}: {e}")))
    }
}
