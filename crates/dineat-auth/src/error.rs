//! Authentication errors.

use dineat_commerce::error::SiteError;
use dineat_storage::StorageError;
use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// User type other than customer, kitchen or admin.
    #[error("Invalid user type: {0}")]
    InvalidUserType(String),

    /// A login form field failed validation.
    #[error(transparent)]
    InvalidForm(#[from] SiteError),

    /// Table number below 1.
    #[error("Invalid table number")]
    InvalidTable,

    /// Session state could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Check if this was caused by user input rather than storage.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, AuthError::Storage(_))
    }
}
