//! Plain-text rendering of the catalog and the cart.

use std::io::{self, Write};

use cartstore_core::Product;
use cartstore_storefront::CartStore;

/// Write one row per catalog product.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn catalog(out: &mut impl Write, products: &[Product]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "Catalog is empty");
    }
    for product in products {
        writeln!(
            out,
            "{:>4}  {:<20} {:>10}",
            product.id,
            product.name,
            product.price.to_string()
        )?;
    }
    Ok(())
}

/// Write the cart lines followed by the total.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn cart<S>(out: &mut impl Write, store: &CartStore<S>) -> io::Result<()> {
    if store.is_cart_empty() {
        return writeln!(out, "Cart is empty");
    }
    for line in store.cart() {
        writeln!(
            out,
            "{:>4}  {:<20} {:>2} x {:>10} = {:>10}",
            line.id(),
            line.name(),
            line.quantity(),
            line.price().to_string(),
            line.line_total().to_string()
        )?;
    }
    writeln!(
        out,
        "Total: {} ({} items)",
        store.cart_total(),
        store.item_count()
    )
}
