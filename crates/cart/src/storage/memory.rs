//! In-memory cart storage.

use std::sync::Mutex;

use crate::store::CartEntry;

use super::{CartStorage, PersistenceError};

/// Cart storage held in process memory.
///
/// Useful for tests and demos where durability across runs does not matter.
/// `None` models a store that has never been written, matching the
/// missing-key case of the file adapter.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<Option<Vec<CartEntry>>>,
}

impl MemoryStorage {
    /// Create an empty, never-written store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a save has ever been performed.
    #[must_use]
    pub fn was_written(&self) -> bool {
        self.entries.lock().is_ok_and(|guard| guard.is_some())
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<CartEntry>, PersistenceError> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| PersistenceError::Io(std::io::Error::other("storage lock poisoned")))?;
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, entries: &[CartEntry]) -> Result<(), PersistenceError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| PersistenceError::Io(std::io::Error::other("storage lock poisoned")))?;
        *guard = Some(entries.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use avogrove_core::{Price, ProductId};

    use super::*;

    #[test]
    fn test_never_written_loads_empty() {
        let storage = MemoryStorage::new();
        assert!(!storage.was_written());
        assert_eq!(storage.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let entries = vec![CartEntry {
            id: ProductId::new(1),
            name: "台灣在地酪梨".to_owned(),
            unit_price: Price::new(80),
            quantity: 2,
        }];

        storage.save(&entries).unwrap();
        assert!(storage.was_written());
        assert_eq!(storage.load().unwrap(), entries);
    }
}
