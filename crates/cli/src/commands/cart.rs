//! Cart-changing commands.
//!
//! Each command delegates to the store and only adds user-facing notices for
//! the cases the store treats as silent no-ops.

use cartstore_core::{ProductId, Quantity};
use cartstore_storefront::{CartError, CartStore, KeyValueStore};
use thiserror::Error;
use tracing::{info, warn};

/// Errors from cart commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Add one unit of catalog product `id`.
///
/// # Errors
///
/// Returns `CommandError::UnknownProduct` if the catalog has no such product.
pub fn add<S: KeyValueStore>(store: &mut CartStore<S>, id: ProductId) -> Result<(), CommandError> {
    let product = store
        .product(id)
        .cloned()
        .ok_or(CommandError::UnknownProduct(id))?;

    if at_max(store, id) {
        warn!(%id, max = Quantity::MAX, "Already at maximum quantity");
        return Ok(());
    }
    store.add_to_cart(&product)?;
    info!(%id, name = %product.name, "Added to cart");
    Ok(())
}

/// Remove the line for `id`.
///
/// # Errors
///
/// Returns `CommandError::Cart` if the cart cannot be persisted.
pub fn remove<S: KeyValueStore>(store: &mut CartStore<S>, id: ProductId) -> Result<(), CommandError> {
    if !in_cart(store, id) {
        return Ok(());
    }
    store.remove_from_cart(id)?;
    info!(%id, "Removed from cart");
    Ok(())
}

/// Add one unit to the line for `id`.
///
/// # Errors
///
/// Returns `CommandError::Cart` if the cart cannot be persisted.
pub fn increase<S: KeyValueStore>(
    store: &mut CartStore<S>,
    id: ProductId,
) -> Result<(), CommandError> {
    if !in_cart(store, id) {
        return Ok(());
    }
    if at_max(store, id) {
        warn!(%id, max = Quantity::MAX, "Already at maximum quantity");
    }
    Ok(store.increase_quantity(id)?)
}

/// Take one unit from the line for `id`.
///
/// # Errors
///
/// Returns `CommandError::Cart` if the cart cannot be persisted.
pub fn decrease<S: KeyValueStore>(
    store: &mut CartStore<S>,
    id: ProductId,
) -> Result<(), CommandError> {
    if !in_cart(store, id) {
        return Ok(());
    }
    let at_min = store
        .cart()
        .line(id)
        .is_some_and(|line| line.quantity().is_min());
    if at_min {
        warn!(%id, "Already at minimum quantity; use `remove` to drop the line");
    }
    Ok(store.decrease_quantity(id)?)
}

fn in_cart<S>(store: &CartStore<S>, id: ProductId) -> bool {
    let present = store.cart().contains(id);
    if !present {
        info!(%id, "Product is not in the cart");
    }
    present
}

fn at_max<S>(store: &CartStore<S>, id: ProductId) -> bool {
    store
        .cart()
        .line(id)
        .is_some_and(|line| line.quantity().is_max())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cartstore_core::Product;
    use cartstore_storefront::MemoryStore;

    fn store() -> CartStore<MemoryStore> {
        let catalog = vec![Product::new(1, "Lukather", 299), Product::new(2, "SRV", 349)];
        CartStore::initialize(MemoryStore::new(), &catalog).unwrap()
    }

    #[test]
    fn test_add_unknown_product() {
        let mut store = store();
        let err = add(&mut store, ProductId::new(9)).unwrap_err();
        assert!(matches!(err, CommandError::UnknownProduct(id) if id == ProductId::new(9)));
        assert!(store.is_cart_empty());
    }

    #[test]
    fn test_add_then_adjust() {
        let mut store = store();
        let id = ProductId::new(2);
        add(&mut store, id).unwrap();
        increase(&mut store, id).unwrap();
        increase(&mut store, id).unwrap();
        decrease(&mut store, id).unwrap();

        assert_eq!(store.cart().line(id).unwrap().quantity().get(), 2);
        assert_eq!(store.cart_total().to_string(), "$698.00");
    }

    #[test]
    fn test_add_at_max_leaves_cart_untouched() {
        let mut store = store();
        let id = ProductId::new(1);
        for _ in 0..Quantity::MAX {
            add(&mut store, id).unwrap();
        }
        let writes = store.storage().write_count();

        add(&mut store, id).unwrap();

        assert!(store.cart().line(id).unwrap().quantity().is_max());
        assert_eq!(store.storage().write_count(), writes);
    }

    #[test]
    fn test_commands_on_missing_line_are_noops() {
        let mut store = store();
        let id = ProductId::new(1);
        remove(&mut store, id).unwrap();
        increase(&mut store, id).unwrap();
        decrease(&mut store, id).unwrap();

        assert!(store.is_cart_empty());
        assert_eq!(store.storage().write_count(), 0);
    }
}
