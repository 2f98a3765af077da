//! Browser-style key-value storage for the DineAt ordering client.
//!
//! Every piece of client state (cart, session, table, language, ratings,
//! last payment) lives under a well-known string key. This crate provides the
//! store abstraction those components share, plus two implementations:
//!
//! - [`MemoryStore`]: in-process, with an optional byte quota
//! - [`FileStore`]: a JSON file on disk, used by the command line front end
//!
//! # Example
//!
//! ```
//! use dineat_storage::{keys, JsonStoreExt, KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set(keys::SELECTED_LANGUAGE, "ta").unwrap();
//! store.set_json(keys::CART, &Vec::<u32>::new()).unwrap();
//!
//! assert_eq!(store.get(keys::SELECTED_LANGUAGE).unwrap().as_deref(), Some("ta"));
//! ```

mod error;
mod file;
pub mod keys;
mod kv;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use kv::{JsonStoreExt, KeyValueStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{keys, FileStore, JsonStoreExt, KeyValueStore, MemoryStore, StorageError};
}
