//! Local implementation of `UsersClientV1`.
//!
//! Used for in-process consumers. It delegates to the domain service and
//! converts errors to SDK error types.

use std::sync::Arc;

use async_trait::async_trait;
use users_sdk::{NewUser, UpdateUserRequest, UserView, UsersClientV1, UsersError};
use uuid::Uuid;

use crate::domain::service::Service;

/// Local implementation of the `UsersClientV1` trait that delegates to the domain service.
pub struct UsersLocalClient {
    service: Arc<Service>,
}

impl UsersLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersClientV1 for UsersLocalClient {
    async fn create_user(&self, new_user: NewUser) -> Result<Uuid, UsersError> {
        self.service.create_user(new_user).await.map_err(Into::into)
    }

    async fn get_user(&self, id: Uuid) -> Result<UserView, UsersError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn update_user(&self, req: UpdateUserRequest) -> Result<(), UsersError> {
        self.service
            .update_user(req.id, req.patch)
            .await
            .map_err(Into::into)
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), UsersError> {
        self.service.delete_user(id).await.map_err(Into::into)
    }

    async fn get_user_age(&self, id: Uuid) -> Result<i32, UsersError> {
        self.service.get_user_age(id).await.map_err(Into::into)
    }
}
