//! Integration tests for the cart store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cartstore-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end walkthroughs of the store operations
//! - `cart_properties` - Property tests over random operation sequences
//! - `file_persistence` - The store on top of the file backend
//!
//! This library holds the fixtures those tests share.

#![allow(clippy::unwrap_used)]

use cartstore_core::Product;
use cartstore_storefront::{CartStore, MemoryStore};

/// A catalog product with an image field, like the bundled guitars.
#[must_use]
pub fn guitar(id: i64, name: &str, price: i64) -> Product {
    Product::new(id, name, price).with_attribute("image", format!("guitar_{id:02}"))
}

/// Three guitars at 100, 250 and 399.
#[must_use]
pub fn small_catalog() -> Vec<Product> {
    vec![
        guitar(1, "Lukather", 100),
        guitar(2, "SRV", 250),
        guitar(3, "Borland", 399),
    ]
}

/// A store over an empty in-memory backend and [`small_catalog`].
///
/// # Panics
///
/// Never in practice: an empty backend always initializes.
#[must_use]
pub fn fresh_store() -> CartStore<MemoryStore> {
    CartStore::initialize(MemoryStore::new(), &small_catalog()).expect("empty store initializes")
}
