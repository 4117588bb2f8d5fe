use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::error::DomainError;

const DEFAULT_MESSAGE: &str = "There was an error during your request";

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub status_code: u16,
    pub message: String,
}

/// HTTP-facing error: a status code plus a client-safe message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Builds an error, normalizing the message the way clients expect it:
    /// double quotes become single quotes and a blank message is replaced
    /// with a generic one.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            DEFAULT_MESSAGE.to_owned()
        } else {
            message.replace('"', "'")
        };
        Self { status, message }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Map a domain error to its HTTP status.
#[must_use]
pub fn status_for(e: &DomainError) -> StatusCode {
    match e {
        DomainError::UserNotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::NoFieldsToUpdate | DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::RegistryCodeNotFound
        | DomainError::RegistryLookup(_)
        | DomainError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let status = status_for(&e);
        match &e {
            DomainError::Database { .. } => {
                // Storage details stay in the logs.
                tracing::error!(error = ?e, "Database error occurred");
                Self::new(status, "An internal database error occurred")
            }
            DomainError::RegistryCodeNotFound | DomainError::RegistryLookup(_) => {
                tracing::error!(error = %e, "Registry lookup failed");
                Self::new(status, e.to_string())
            }
            DomainError::UserNotFound { .. }
            | DomainError::NoFieldsToUpdate
            | DomainError::Validation { .. } => {
                tracing::debug!(error = %e, status = status.as_u16(), "Request rejected");
                Self::new(status, e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Invalid request body");
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Invalid path parameter");
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorDetails {
            status_code: self.status.as_u16(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
