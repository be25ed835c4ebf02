//! Durable key-value persistence for the store's mutable state.
//!
//! The store round-trips three independent records - cart, wishlist, and
//! auth flag - through whatever medium backs the [`StateStore`] trait.
//! Values are self-describing JSON strings; keys are stable and listed in
//! [`keys`]. Implementations here: [`JsonFileStore`] (one file per key
//! under a data directory) and [`MemoryStore`] (ephemeral, for tests).

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Stable record keys for the persisted state.
pub mod keys {
    /// Key for the ordered cart line items.
    pub const CART: &str = "cart";

    /// Key for the ordered wishlist product references.
    pub const WISHLIST: &str = "wishlist";

    /// Key for the session authentication flag.
    pub const AUTH: &str = "isAuthenticated";
}

/// Error reading or writing a persisted record.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The storage medium failed.
    #[error("storage I/O error for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized.
    #[error("serialization error for key {key:?}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A durable key-value medium for serialized state records.
///
/// `get` returns `Ok(None)` for an absent key - absence is not an error.
/// Implementations are free to use any storage they like as long as a
/// written value reads back verbatim.
pub trait StateStore {
    /// Retrieve the serialized record stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Insert or replace the serialized record stored under `key`.
    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
}
