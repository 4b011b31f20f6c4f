//! Key-value persistence for the cart.
//!
//! The cart store never touches a global: the host hands it a
//! [`KeyValueStore`] and the store owns it for its whole lifetime.
//!
//! # Backends
//!
//! - [`MemoryStore`] - `HashMap`-backed, for tests and embedding
//! - [`FileStore`] - One file per key under a directory, used by the CLI
//!
//! # Keys
//!
//! The cart only ever uses [`keys::CART`].

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use thiserror::Error;

/// Keys used in the key-value store.
pub mod keys {
    /// Key holding the serialized cart.
    pub const CART: &str = "cart";
}

/// Errors raised by a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be mapped onto this backend.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// Reading or writing the backing file failed.
    #[error("storage I/O error for {}: {source}", path.display())]
    Io {
        /// File the backend was accessing.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// String-keyed, string-valued persistent slot provided by the host.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
