//! Domain service layer - business logic and rules.
//!
//! ## Architecture
//!
//! - `users` - user create/read/update/delete with registry enrichment
//! - `age` - age derivation from the date of birth
//!
//! ## Layering Rules
//!
//! The service depends only on the ports in `domain::ports` and on
//! `domain::repos::UsersRepository`. Concrete adapters are wired in `module.rs`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use users_sdk::{NewUser, UserPatch, UserView};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::ports::{Clock, RegistryClient};
use crate::domain::repos::UsersRepository;

mod age;
mod users;

pub use age::age_in_years;

/// What to do when the registry answers without a code for a birth number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRegistryCodePolicy {
    /// Fail the creation with `RegistryCodeNotFound`.
    #[default]
    Reject,
    /// Create the user with a null registry code.
    StoreNull,
}

/// Configuration for the domain service
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub missing_registry_code: MissingRegistryCodePolicy,
}

/// User lifecycle service.
///
/// Stateless per call; all state lives behind the repository.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    registry: Arc<dyn RegistryClient>,
    clock: Arc<dyn Clock>,
    config: ServiceConfig,
}

impl Service {
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        registry: Arc<dyn RegistryClient>,
        clock: Arc<dyn Clock>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            registry,
            clock,
            config,
        }
    }

    /// Create a user, resolving its registry code first.
    ///
    /// # Errors
    /// `Validation` for empty fields, `RegistryLookup` when the registry call fails,
    /// `RegistryCodeNotFound` when no code exists and the policy rejects it,
    /// `Database` on storage failures.
    pub async fn create_user(&self, new_user: NewUser) -> Result<Uuid, DomainError> {
        users::create_user(self, new_user).await
    }

    /// # Errors
    /// `UserNotFound` if the id does not exist, `Database` on storage failures.
    pub async fn get_user(&self, id: Uuid) -> Result<UserView, DomainError> {
        users::get_user(self, id).await
    }

    /// Apply a partial update to a user.
    ///
    /// # Errors
    /// `NoFieldsToUpdate` when the patch is empty (checked before any store access),
    /// `Validation` for empty names, `UserNotFound`, `Database`.
    pub async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<(), DomainError> {
        users::update_user(self, id, patch).await
    }

    /// # Errors
    /// `UserNotFound` if the id does not exist, `Database` on storage failures.
    pub async fn delete_user(&self, id: Uuid) -> Result<(), DomainError> {
        users::delete_user(self, id).await
    }

    /// Age of the user in whole 365.25-day years at the current clock instant.
    ///
    /// # Errors
    /// `UserNotFound` if the id does not exist, `Database` on storage failures.
    pub async fn get_user_age(&self, id: Uuid) -> Result<i32, DomainError> {
        users::get_user_age(self, id).await
    }
}
