use thiserror::Error;
use users_sdk::UsersError;
use uuid::Uuid;

/// Classified failure of a registry lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Registry has no record for the birth number")]
    NotFound,

    #[error("Registry responded with HTTP {status}")]
    Upstream { status: u16 },

    #[error("Registry request timed out")]
    Timeout,

    #[error("Registry request failed: {message}")]
    Transport { message: String },

    #[error("Registry returned an invalid payload: {message}")]
    InvalidPayload { message: String },
}

impl LookupError {
    /// HTTP-like status describing the failure class.
    ///
    /// A registry 404 keeps its not-found class; every other failure is a server-side error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Upstream { .. }
            | Self::Timeout
            | Self::Transport { .. }
            | Self::InvalidPayload { .. } => 500,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            message: message.into(),
        }
    }
}

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {id}")]
    UserNotFound { id: Uuid },

    #[error("At least one property must be set to update the user.")]
    NoFieldsToUpdate,

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Registry code was not found for the birth number")]
    RegistryCodeNotFound,

    #[error("Registry lookup failed: {0}")]
    RegistryLookup(#[from] LookupError),

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    #[must_use]
    pub fn user_not_found(id: Uuid) -> Self {
        Self::UserNotFound { id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for UsersError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::UserNotFound { id } => UsersError::not_found(id),
            DomainError::NoFieldsToUpdate => UsersError::NoFieldsToUpdate,
            DomainError::Validation { field, message } => {
                UsersError::validation(format!("{field}: {message}"))
            }
            DomainError::RegistryCodeNotFound => UsersError::RegistryCodeNotFound,
            DomainError::RegistryLookup(e) => UsersError::registry_unavailable(e.status_code()),
            DomainError::Database { .. } => UsersError::internal(),
        }
    }
}
