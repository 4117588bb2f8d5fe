#![allow(clippy::unwrap_used, clippy::expect_used)]

//! `UsersClientV1` obtained from the module, as other in-process consumers use it.

use time::macros::datetime;
use users::domain::error::LookupError;
use users_sdk::{UpdateUserRequest, UserPatch, UsersError};
use uuid::Uuid;

mod support;
use support::{StaticRegistry, TestContext, daniel};

#[tokio::test]
async fn full_lifecycle_through_the_client() {
    let ctx = TestContext::new().await;
    let client = ctx.module.client();

    let id = client.create_user(daniel()).await.unwrap();

    let view = client.get_user(id).await.unwrap();
    assert_eq!(view.first_name, "Daniel");
    assert_eq!(view.ruian, Some(12345));

    client
        .update_user(UpdateUserRequest {
            id,
            patch: UserPatch {
                first_name: None,
                last_name: Some("Novak".to_owned()),
            },
        })
        .await
        .unwrap();
    let view = client.get_user(id).await.unwrap();
    assert_eq!(view.first_name, "Daniel");
    assert_eq!(view.last_name, "Novak");
    assert_eq!(view.date_of_birth, datetime!(1989-10-14 0:00 UTC));

    // 2023-02-12 minus 1989-10-14 is 12174 days.
    assert_eq!(client.get_user_age(id).await.unwrap(), 33);

    client.delete_user(id).await.unwrap();
    assert_eq!(
        client.get_user(id).await.unwrap_err(),
        UsersError::NotFound { id }
    );
}

#[tokio::test]
async fn empty_patch_maps_to_sdk_error() {
    let ctx = TestContext::new().await;
    let client = ctx.module.client();

    let err = client
        .update_user(UpdateUserRequest {
            id: Uuid::new_v4(),
            patch: UserPatch::default(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, UsersError::NoFieldsToUpdate);
}

#[tokio::test]
async fn registry_errors_map_to_sdk_errors() {
    let ctx = TestContext::with_registry(StaticRegistry::new(Ok(None))).await;
    let err = ctx.module.client().create_user(daniel()).await.unwrap_err();
    assert_eq!(err, UsersError::RegistryCodeNotFound);

    let ctx = TestContext::with_registry(StaticRegistry::new(Err(LookupError::NotFound))).await;
    let err = ctx.module.client().create_user(daniel()).await.unwrap_err();
    assert_eq!(err, UsersError::RegistryUnavailable { status: 404 });

    let ctx = TestContext::with_registry(StaticRegistry::new(Err(LookupError::Upstream {
        status: 503,
    })))
    .await;
    let err = ctx.module.client().create_user(daniel()).await.unwrap_err();
    assert_eq!(err, UsersError::RegistryUnavailable { status: 500 });
}

#[tokio::test]
async fn blank_fields_map_to_validation() {
    let ctx = TestContext::new().await;
    let mut new_user = daniel();
    new_user.birth_number = String::new();

    let err = ctx.module.client().create_user(new_user).await.unwrap_err();

    assert!(matches!(err, UsersError::Validation { .. }));
    assert_eq!(ctx.registry.calls(), 0);
}
