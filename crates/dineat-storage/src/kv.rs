//! Key-Value store trait with typed JSON helpers.

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};

/// String-keyed, string-valued store that survives page reloads.
///
/// Mirrors the semantics of browser local storage: values are opaque strings,
/// writes replace the whole value, and a missing key reads as `None`.
/// Receivers are `&self` so several components can share one store.
pub trait KeyValueStore {
    /// Get the raw value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// List all keys currently stored.
    fn keys(&self) -> Result<Vec<String>, StorageError>;

    /// Check if a key exists in the store.
    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}

/// JSON helpers available on every [`KeyValueStore`], including trait objects.
///
/// # Example
///
/// ```
/// use dineat_storage::{JsonStoreExt, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set_json("ratings", &vec![1, 2, 3]).unwrap();
/// let back: Option<Vec<u8>> = store.get_json("ratings").unwrap();
/// assert_eq!(back, Some(vec![1, 2, 3]));
/// ```
pub trait JsonStoreExt: KeyValueStore {
    /// Get and decode a JSON value.
    ///
    /// Returns `Ok(None)` if the key doesn't exist and
    /// `Err(StorageError::Serialization)` if the stored text is not valid
    /// JSON of the requested shape.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode a value as JSON and store it.
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> JsonStoreExt for S {}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        (**self).keys()
    }
}

/// Bytes an entry occupies for quota accounting.
pub(crate) fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}
