//! Durable persistence for the cart.
//!
//! Every cart mutation writes through to a [`CartStorage`] implementation
//! before the operation returns, so the durable copy never lags the
//! in-memory store. The stored layout is a single value holding the JSON
//! array of cart entries.
//!
//! `load` reports corrupt content as a typed [`PersistenceError`] rather
//! than silently returning an empty sequence; the service layer decides to
//! recover with an empty cart. Keeping the recovery decision out of the
//! adapter means an unrelated failure is never masked by the same
//! catch-all.

mod json_file;
mod memory;

use thiserror::Error;

use crate::store::CartEntry;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Errors from the durable store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the underlying store failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The cart could not be serialized for storage.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Stored content exists but is not a valid cart payload.
    #[error("stored cart is corrupt: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Contract for the durable cart store.
pub trait CartStorage {
    /// Read the stored entries.
    ///
    /// A missing value is not an error: it means no cart has been saved yet
    /// and yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the store is unreadable or holds a
    /// corrupt payload. Callers that must not fail (startup restore)
    /// recover with an empty cart.
    fn load(&self) -> Result<Vec<CartEntry>, PersistenceError>;

    /// Serialize and write the entries, replacing any stored value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if serialization or the write fails.
    /// A failed save is non-fatal to the cart: the in-memory state remains
    /// authoritative.
    fn save(&self, entries: &[CartEntry]) -> Result<(), PersistenceError>;
}
