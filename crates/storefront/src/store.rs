//! The cart store.
//!
//! `CartStore` owns the cart, the catalog snapshot and the key-value backend.
//! Each operation commits to the in-memory cart first and, if the cart
//! changed, writes the whole cart under [`keys::CART`] before returning. So
//! the persisted value always matches the last committed cart, one write per
//! committed change, and an operation that changes nothing writes nothing.
//!
//! # Example
//!
//! ```
//! use cartstore_core::{Price, Product, ProductId};
//! use cartstore_storefront::{CartStore, MemoryStore};
//!
//! let catalog = vec![Product::new(1, "Lukather", 100)];
//! let mut store = CartStore::initialize(MemoryStore::new(), &catalog).unwrap();
//!
//! let item = store.product(ProductId::new(1)).cloned().unwrap();
//! store.add_to_cart(&item).unwrap();
//! store.add_to_cart(&item).unwrap();
//!
//! assert_eq!(store.cart_total(), Price::from(200));
//! assert!(!store.is_cart_empty());
//! ```

use cartstore_core::{Price, Product, ProductId};
use tracing::instrument;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::storage::{KeyValueStore, keys};

/// Cart state bound to a persistent key-value slot.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    data: Vec<Product>,
    cart: Cart,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Load the persisted cart and take a snapshot of the catalog.
    ///
    /// A missing cart key, or one holding an empty string, yields an empty
    /// cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the backend cannot be read, and
    /// `CartError::Malformed` or `CartError::DuplicateLine` if a value is
    /// stored but is not a valid cart. There is no fallback to an empty cart
    /// in that case.
    #[instrument(skip_all)]
    pub fn initialize<C: Catalog + ?Sized>(storage: S, catalog: &C) -> Result<Self> {
        let data = catalog.products();
        let cart = match storage.get(keys::CART)? {
            Some(raw) if !raw.is_empty() => Cart::from_json(&raw)?,
            _ => Cart::new(),
        };

        tracing::info!(
            lines = cart.len(),
            products = data.len(),
            "Cart store initialized"
        );
        Ok(Self {
            storage,
            data,
            cart,
        })
    }

    /// Add one unit of `item`, appending a new line if needed.
    ///
    /// No-op when the product's line is already at the maximum quantity.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the updated cart cannot be persisted. The
    /// in-memory cart keeps the change.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub fn add_to_cart(&mut self, item: &Product) -> Result<()> {
        if self.cart.add(item) {
            self.persist()
        } else {
            tracing::debug!("Line already at maximum quantity");
            Ok(())
        }
    }

    /// Remove the line for `id`. No-op if there is none.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the updated cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<()> {
        if self.cart.remove(id) {
            self.persist()
        } else {
            tracing::debug!("No line to remove");
            Ok(())
        }
    }

    /// Add one unit to the line for `id`, up to the maximum.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the updated cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn increase_quantity(&mut self, id: ProductId) -> Result<()> {
        if self.cart.increase(id) {
            self.persist()
        } else {
            tracing::debug!("Quantity unchanged");
            Ok(())
        }
    }

    /// Take one unit from the line for `id`, never going below 1.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the updated cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn decrease_quantity(&mut self, id: ProductId) -> Result<()> {
        if self.cart.decrease(id) {
            self.persist()
        } else {
            tracing::debug!("Quantity unchanged");
            Ok(())
        }
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the emptied cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) -> Result<()> {
        if self.cart.clear() {
            tracing::info!("Cart cleared");
            self.persist()
        } else {
            Ok(())
        }
    }

    fn persist(&mut self) -> Result<()> {
        let raw = self.cart.to_json()?;
        self.storage.set(keys::CART, &raw).inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to persist cart");
        })?;
        tracing::debug!(lines = self.cart.len(), "Cart persisted");
        Ok(())
    }
}

impl<S> CartStore<S> {
    /// Catalog snapshot taken at initialization.
    #[must_use]
    pub fn data(&self) -> &[Product] {
        &self.data
    }

    /// Look up a product in the catalog snapshot.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.data.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of `quantity * price` over all lines; zero for an empty cart.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart.total()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// The key-value backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Release the key-value backend.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}
