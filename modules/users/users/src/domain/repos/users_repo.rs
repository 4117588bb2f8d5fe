use async_trait::async_trait;
use users_sdk::User;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for User persistence operations.
///
/// This trait abstracts persistence operations for users, allowing the domain service
/// to remain independent of the underlying storage implementation.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Find a user by ID. A missing user is `Ok(None)`.
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Insert a new user. The store stamps `created_at`.
    async fn add(&self, user: User) -> Result<User, DomainError>;

    /// Persist the mutable fields of an existing user. The store stamps `modified_at`.
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Physically delete a user.
    async fn remove(&self, user: &User) -> Result<(), DomainError>;
}
