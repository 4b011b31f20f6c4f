//! Storefront cart store library.
//!
//! Holds the shopper's cart in memory, keeps each line's quantity within
//! `1..=5`, derives totals, and writes the cart to a host-provided key-value
//! slot after every change.
//!
//! # Modules
//!
//! - [`store`] - [`CartStore`], the public face of the cart
//! - [`cart`] - The [`Cart`] value and its pure transitions
//! - [`catalog`] - Read-only product catalog
//! - [`storage`] - Key-value backends
//! - [`config`] - Environment configuration for hosts
//! - [`error`] - [`CartError`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use cart::Cart;
pub use catalog::{Catalog, CatalogError, StaticCatalog};
pub use config::{CartConfig, ConfigError, LogFormat};
pub use error::CartError;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::CartStore;
