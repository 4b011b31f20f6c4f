//! CLI command implementations.

pub mod cart;
pub mod render;

use cartstore_storefront::{CartConfig, CartStore, FileStore, StaticCatalog};

/// Open the file-backed cart store described by `config`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the persisted cart is
/// unreadable.
pub fn open_store(
    config: &CartConfig,
) -> Result<CartStore<FileStore>, Box<dyn std::error::Error>> {
    let catalog = match &config.catalog_path {
        Some(path) => StaticCatalog::load(path)?,
        None => StaticCatalog::bundled()?,
    };

    let storage = FileStore::new(&config.storage_dir);
    tracing::debug!(dir = %storage.dir().display(), "Opening cart storage");

    Ok(CartStore::initialize(storage, &catalog)?)
}
