use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};
use users_sdk::User;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::ports::Clock;
use crate::domain::repos::UsersRepository;
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::user::{ActiveModel as UserAM, Entity as UserEntity};

/// ORM-based implementation of the `UsersRepository` trait.
///
/// Stamps `created_at` on insert and `modified_at` on update from the injected clock.
#[derive(Clone)]
pub struct OrmUsersRepository {
    conn: DatabaseConnection,
    clock: Arc<dyn Clock>,
}

impl OrmUsersRepository {
    #[must_use]
    pub fn new(conn: DatabaseConnection, clock: Arc<dyn Clock>) -> Self {
        Self { conn, clock }
    }
}

#[async_trait]
impl UsersRepository for OrmUsersRepository {
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let found = UserEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn add(&self, mut user: User) -> Result<User, DomainError> {
        user.created_at = self.clock.now_utc();
        user.modified_at = None;

        let _ = UserAM::from(&user)
            .insert(&self.conn)
            .await
            .map_err(db_err)?;
        Ok(user)
    }

    async fn update(&self, mut user: User) -> Result<User, DomainError> {
        user.modified_at = Some(self.clock.now_utc());

        // Only the mutable columns are written.
        let m = UserAM {
            id: Unchanged(user.id),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            modified_at: Set(user.modified_at),
            ..Default::default()
        };

        match m.update(&self.conn).await {
            Ok(_) => Ok(user),
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => {
                Err(DomainError::user_not_found(user.id))
            }
            Err(e) => Err(db_err(e)),
        }
    }

    async fn remove(&self, user: &User) -> Result<(), DomainError> {
        let result = UserEntity::delete_by_id(user.id)
            .exec(&self.conn)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::user_not_found(user.id));
        }
        Ok(())
    }
}
