//! In-memory store for tests and embedders without durable storage.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::kv::entry_size;
use crate::{KeyValueStore, StorageError};

/// Key-Value store held in memory.
///
/// Supports an optional byte quota and a switch that makes every write fail,
/// which is how browser storage behaves when it is full or disabled.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    quota_bytes: Option<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    /// Create an empty store without a quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects writes beyond `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Make every subsequent `set`/`remove` fail with `Unavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Total bytes used by keys and values.
    pub fn used_bytes(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| entry_size(k, v))
            .sum()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable(
                "writes are disabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable()?;

        if let Some(quota) = self.quota_bytes {
            let previous = self
                .entries
                .borrow()
                .get(key)
                .map(|old| entry_size(key, old))
                .unwrap_or(0);
            let needed = self.used_bytes() - previous + entry_size(key, value);
            if needed > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries.borrow().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        store.set("selectedLanguage", "ta").unwrap();
        assert_eq!(store.get("selectedLanguage").unwrap().as_deref(), Some("ta"));

        store.remove("selectedLanguage").unwrap();
        assert!(store.get("selectedLanguage").unwrap().is_none());
        // Removing again is fine
        store.remove("selectedLanguage").unwrap();
    }

    #[test]
    fn test_set_replaces_value() {
        let store = MemoryStore::new();
        store.set("selectedTable", "3").unwrap();
        store.set("selectedTable", "7").unwrap();
        assert_eq!(store.get("selectedTable").unwrap().as_deref(), Some("7"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_quota_exceeded() {
        let store = MemoryStore::with_quota(16);
        store.set("cart", "[]").unwrap();

        let err = store.set("cart", "[\"a very long value\"]").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { quota: 16, .. }));
        // Previous value is untouched
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        let store = MemoryStore::with_quota(10);
        store.set("k", "12345").unwrap();
        // 1 + 9 = 10 bytes fits once the old value is discounted
        store.set("k", "123456789").unwrap();
        assert_eq!(store.used_bytes(), 10);
    }

    #[test]
    fn test_fail_writes() {
        let store = MemoryStore::new();
        store.set("userType", "admin").unwrap();
        store.set_fail_writes(true);

        assert!(matches!(
            store.set("userType", "kitchen"),
            Err(StorageError::Unavailable(_))
        ));
        assert!(store.remove("userType").is_err());
        // Reads still work
        assert_eq!(store.get("userType").unwrap().as_deref(), Some("admin"));

        store.set_fail_writes(false);
        store.set("userType", "kitchen").unwrap();
    }

    #[test]
    fn test_keys_sorted() {
        let store = MemoryStore::new();
        store.set("ratings", "{}").unwrap();
        store.set("cart", "[]").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["cart", "ratings"]);
    }
}
