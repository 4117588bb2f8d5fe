//! Outbound ports used by the domain service.

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::error::LookupError;

/// Source of the current UTC instant.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> OffsetDateTime;
}

/// Lookup of registry ("Ruian") codes by birth number.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Resolve the registry code for `birth_number`.
    ///
    /// `Ok(None)` means the registry answered but holds no code.
    async fn resolve(&self, birth_number: &str) -> Result<Option<i32>, LookupError>;
}
