//! Conversions between SeaORM models and SDK contract types.

use sea_orm::Set;
use users_sdk::User;

use crate::infra::storage::entity::user::{ActiveModel, Model};

impl From<Model> for User {
    fn from(e: Model) -> Self {
        Self {
            id: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            date_of_birth: e.date_of_birth,
            birth_number: e.birth_number,
            ruian: e.ruian,
            created_at: e.created_at,
            modified_at: e.modified_at,
        }
    }
}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        Self {
            id: Set(user.id),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            date_of_birth: Set(user.date_of_birth),
            birth_number: Set(user.birth_number.clone()),
            ruian: Set(user.ruian),
            created_at: Set(user.created_at),
            modified_at: Set(user.modified_at),
        }
    }
}
