//! In-memory key-value store.

use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

/// `HashMap`-backed store that also counts writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `value` under `key`.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries, writes: 0 }
    }

    /// Borrow the raw value under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of `set` calls served so far.
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}
