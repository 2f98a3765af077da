//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing the store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The store cannot be used right now.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A write would push the store over its byte quota.
    #[error("Storage quota exceeded writing {key}: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    /// A stored value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backing file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Check whether the error came from decoding a stored value.
    ///
    /// Callers treat these as "no prior data" rather than a failure.
    pub fn is_malformed_data(&self) -> bool {
        matches!(self, StorageError::Serialization(_))
    }
}
