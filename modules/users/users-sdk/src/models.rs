//! Public models for the `users` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `users` module and its consumers.

use time::OffsetDateTime;
use uuid::Uuid;

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Always in UTC.
    pub date_of_birth: OffsetDateTime,
    pub birth_number: String,
    /// Registry ("Ruian") code resolved once at creation.
    pub ruian: Option<i32>,
    pub created_at: OffsetDateTime,
    /// `None` until the first update.
    pub modified_at: Option<OffsetDateTime>,
}

/// Data for creating a new user.
///
/// `date_of_birth` may carry any offset; it is normalized to UTC on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: OffsetDateTime,
    pub birth_number: String,
}

/// Partial update data for a user.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserPatch {
    /// Returns `true` when the patch does not carry any field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}

/// Request to update a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub id: Uuid,
    pub patch: UserPatch,
}

/// Read projection of a user returned by lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: OffsetDateTime,
    pub ruian: Option<i32>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            date_of_birth: user.date_of_birth,
            ruian: user.ruian,
        }
    }
}
