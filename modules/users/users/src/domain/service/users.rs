use time::UtcOffset;
use users_sdk::{NewUser, User, UserPatch, UserView};
use uuid::Uuid;

use super::{MissingRegistryCodePolicy, Service, age_in_years};
use crate::domain::error::DomainError;
use crate::domain::mask_birth_number;

fn ensure_not_blank(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// A dot-only value would be dropped as a path segment of the registry URL.
fn ensure_birth_number_usable(birth_number: &str) -> Result<(), DomainError> {
    ensure_not_blank("birthNumber", birth_number)?;
    if birth_number.trim().chars().all(|c| c == '.') {
        return Err(DomainError::validation(
            "birthNumber",
            "must not consist of dots only",
        ));
    }
    Ok(())
}

fn validate_new_user(new_user: &NewUser) -> Result<(), DomainError> {
    ensure_not_blank("firstName", &new_user.first_name)?;
    ensure_not_blank("lastName", &new_user.last_name)?;
    ensure_birth_number_usable(&new_user.birth_number)
}

fn validate_user_patch(patch: &UserPatch) -> Result<(), DomainError> {
    if patch.is_empty() {
        return Err(DomainError::NoFieldsToUpdate);
    }
    if let Some(first_name) = &patch.first_name {
        ensure_not_blank("firstName", first_name)?;
    }
    if let Some(last_name) = &patch.last_name {
        ensure_not_blank("lastName", last_name)?;
    }
    Ok(())
}

async fn find_user(svc: &Service, id: Uuid) -> Result<User, DomainError> {
    svc.repo
        .get(id)
        .await?
        .ok_or_else(|| DomainError::user_not_found(id))
}

async fn resolve_registry_code(
    svc: &Service,
    birth_number: &str,
) -> Result<Option<i32>, DomainError> {
    let resolved = svc.registry.resolve(birth_number).await?;

    match (resolved, svc.config.missing_registry_code) {
        (Some(code), _) => Ok(Some(code)),
        (None, MissingRegistryCodePolicy::Reject) => Err(DomainError::RegistryCodeNotFound),
        (None, MissingRegistryCodePolicy::StoreNull) => {
            tracing::warn!(
                birth_number = %mask_birth_number(birth_number),
                "Registry has no code for birth number, storing user without it"
            );
            Ok(None)
        }
    }
}

pub(super) async fn create_user(svc: &Service, new_user: NewUser) -> Result<Uuid, DomainError> {
    tracing::info!("Creating new user");

    validate_new_user(&new_user)?;

    let NewUser {
        first_name,
        last_name,
        date_of_birth,
        birth_number,
    } = new_user;

    let ruian = resolve_registry_code(svc, &birth_number).await?;

    let user = User {
        id: Uuid::now_v7(),
        first_name,
        last_name,
        date_of_birth: date_of_birth.to_offset(UtcOffset::UTC),
        birth_number,
        ruian,
        created_at: svc.clock.now_utc(),
        modified_at: None,
    };

    let stored = svc.repo.add(user).await?;

    tracing::info!("Successfully created user with id={}", stored.id);
    Ok(stored.id)
}

pub(super) async fn get_user(svc: &Service, id: Uuid) -> Result<UserView, DomainError> {
    tracing::debug!("Getting user by id");

    let user = find_user(svc, id).await?;

    tracing::debug!("Successfully retrieved user");
    Ok(user.into())
}

pub(super) async fn update_user(
    svc: &Service,
    id: Uuid,
    patch: UserPatch,
) -> Result<(), DomainError> {
    tracing::info!("Updating user");

    validate_user_patch(&patch)?;

    let mut current = find_user(svc, id).await?;

    if let Some(first_name) = patch.first_name {
        current.first_name = first_name;
    }
    if let Some(last_name) = patch.last_name {
        current.last_name = last_name;
    }

    svc.repo.update(current).await?;

    tracing::info!("Successfully updated user");
    Ok(())
}

pub(super) async fn delete_user(svc: &Service, id: Uuid) -> Result<(), DomainError> {
    tracing::info!("Deleting user");

    let user = find_user(svc, id).await?;
    svc.repo.remove(&user).await?;

    tracing::info!("Successfully deleted user");
    Ok(())
}

pub(super) async fn get_user_age(svc: &Service, id: Uuid) -> Result<i32, DomainError> {
    tracing::debug!("Computing user age");

    let user = find_user(svc, id).await?;
    let now = svc.clock.now_utc();

    Ok(age_in_years(user.date_of_birth, now))
}
