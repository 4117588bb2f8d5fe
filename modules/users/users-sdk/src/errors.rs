//! Public error types for the `users` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can be returned by the `UsersClientV1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersError {
    /// User with the specified ID was not found.
    #[error("User not found: {id}")]
    NotFound { id: Uuid },

    /// The update request did not carry any field.
    #[error("At least one property must be set to update the user")]
    NoFieldsToUpdate,

    /// Validation error with the provided data.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The registry had no code for the birth number.
    #[error("Registry code not found")]
    RegistryCodeNotFound,

    /// The registry lookup itself failed.
    #[error("Registry lookup failed with status {status}")]
    RegistryUnavailable { status: u16 },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl UsersError {
    /// Create a `NotFound` error.
    #[must_use]
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    /// Create a Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a `RegistryUnavailable` error.
    #[must_use]
    pub fn registry_unavailable(status: u16) -> Self {
        Self::RegistryUnavailable { status }
    }

    /// Create an Internal error.
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
