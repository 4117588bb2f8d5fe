//! `UsersClientV1` trait definition.
//!
//! This trait defines the public API for the `users` module.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::UsersError;
use crate::models::{NewUser, UpdateUserRequest, UserView};

/// Public API trait for the `users` module.
///
/// ```ignore
/// let client = module.client();
/// let user = client.get_user(user_id).await?;
/// ```
#[async_trait]
pub trait UsersClientV1: Send + Sync {
    /// Create a new user, resolving its registry code, and return the generated id.
    async fn create_user(&self, new_user: NewUser) -> Result<Uuid, UsersError>;

    /// Get a user by ID.
    async fn get_user(&self, id: Uuid) -> Result<UserView, UsersError>;

    /// Update a user with partial data.
    async fn update_user(&self, req: UpdateUserRequest) -> Result<(), UsersError>;

    /// Delete a user by ID.
    async fn delete_user(&self, id: Uuid) -> Result<(), UsersError>;

    /// Age of the user in whole years.
    async fn get_user_age(&self, id: Uuid) -> Result<i32, UsersError>;
}
