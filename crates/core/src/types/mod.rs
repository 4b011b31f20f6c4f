//! Core types for the cart store.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod quantity;

pub use id::ProductId;
pub use price::Price;
pub use product::{CartLine, Product};
pub use quantity::{Quantity, QuantityError};
