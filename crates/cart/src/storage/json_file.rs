//! File-backed cart storage.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::store::CartEntry;

use super::{CartStorage, PersistenceError};

/// Cart storage backed by a single JSON file.
///
/// The file holds the JSON array of cart entries, the same payload the
/// storefront's browser predecessor kept under one `localStorage` key. The
/// write replaces the whole file; there is no partial update.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create storage writing to the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<CartEntry>, PersistenceError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // No file yet means no cart has been saved.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PersistenceError::Io(e)),
        };

        serde_json::from_str(&raw).map_err(PersistenceError::Deserialize)
    }

    fn save(&self, entries: &[CartEntry]) -> Result<(), PersistenceError> {
        let payload = serde_json::to_vec(entries).map_err(PersistenceError::Serialize)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}
