//! In-memory state store for tests and ephemeral sessions.

use std::collections::HashMap;

use super::{PersistError, StateStore};

/// A [`StateStore`] backed by a `HashMap`. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly, bypassing the trait. Test helper.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.records.insert(key.to_string(), value.to_string());
    }

    /// All keys currently stored.
    #[must_use]
    pub fn record_keys(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.records.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("cart").expect("get").is_none());
    }

    #[test]
    fn test_put_get() {
        let mut store = MemoryStore::new();
        store.put("wishlist", "[]").expect("put");
        assert_eq!(store.get("wishlist").expect("get").as_deref(), Some("[]"));
    }

    #[test]
    fn test_seed_visible_through_trait() {
        let mut store = MemoryStore::new();
        store.seed("isAuthenticated", "true");
        assert_eq!(
            store.get("isAuthenticated").expect("get").as_deref(),
            Some("true")
        );
    }
}
