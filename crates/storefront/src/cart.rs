//! The cart value: an ordered list of lines, at most one per product.
//!
//! Every mutator reports whether it changed anything. Bound clamps and
//! unknown IDs return `false` and leave the cart untouched, which is how
//! [`CartStore`](crate::CartStore) decides whether a write is due.

use std::collections::HashSet;

use cartstore_core::{CartLine, Price, Product, ProductId};
use serde::Serialize;

use crate::error::{CartError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a cart from lines, enforcing one line per product.
    ///
    /// # Errors
    ///
    /// Returns `CartError::DuplicateLine` if two lines share a product ID.
    pub fn from_lines(lines: Vec<CartLine>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(lines.len());
        if let Some(dup) = lines.iter().find(|line| !seen.insert(line.id())) {
            return Err(CartError::DuplicateLine(dup.id()));
        }
        Ok(Self { lines })
    }

    /// Decode a persisted cart (a JSON array of lines).
    ///
    /// # Errors
    ///
    /// Returns `CartError::Malformed` for invalid JSON, missing fields or
    /// out-of-range quantities, and `CartError::DuplicateLine` for repeated IDs.
    pub fn from_json(raw: &str) -> Result<Self> {
        let lines: Vec<CartLine> = serde_json::from_str(raw).map_err(CartError::Malformed)?;
        Self::from_lines(lines)
    }

    /// Encode the cart for persistence.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Encode` if a price cannot be written as a number.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(CartError::Encode)
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    /// Sum of `quantity * price` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .map(|line| u32::from(line.quantity().get()))
            .sum()
    }

    /// Add one unit of `product`.
    ///
    /// A product already in the cart gains a unit unless it is at the maximum;
    /// a new product is appended with quantity 1.
    pub fn add(&mut self, product: &Product) -> bool {
        match self.line_mut(product.id) {
            Some(line) => line.increment(),
            None => {
                self.lines.push(CartLine::new(product.clone()));
                true
            }
        }
    }

    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        self.lines.len() != before
    }

    pub fn increase(&mut self, id: ProductId) -> bool {
        self.line_mut(id).is_some_and(CartLine::increment)
    }

    pub fn decrease(&mut self, id: ProductId) -> bool {
        self.line_mut(id).is_some_and(CartLine::decrement)
    }

    pub fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.clear();
        true
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
