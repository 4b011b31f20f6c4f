//! Directory-backed key-value store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous value intact. The directory is created
/// on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidKey` unless the key is non-empty ASCII
    /// alphanumerics, `-` or `_`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Io { path, source })
    }
}
