use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Json, Path};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{Span, field, info};
use uuid::Uuid;

use crate::api::rest::dto::{CreateUserReq, UpdateUserReq, UserAgeDto, UserDto};
use crate::api::rest::error::{ApiError, ApiResult, ErrorDetails};
use crate::domain::service::Service;

type JsonBody<T> = Result<Json<T>, JsonRejection>;
type UserPath = Result<Path<Uuid>, PathRejection>;

fn user_id(path: UserPath) -> ApiResult<Uuid> {
    let Path(id) = path?;
    Span::current().record("user_id", field::display(id));
    Ok(id)
}

/// Create a user
#[utoipa::path(
    post,
    path = "/user",
    tag = "users",
    request_body = CreateUserReq,
    responses(
        (status = 201, description = "User created",
            headers(("Location" = String, description = "Path of the created user"))),
        (status = 400, description = "Invalid request body", body = ErrorDetails),
        (status = 500, description = "Registry lookup failed or no registry code", body = ErrorDetails),
    )
)]
#[tracing::instrument(skip_all, fields(user_id = field::Empty))]
pub async fn create_user(
    Extension(svc): Extension<Arc<Service>>,
    body: JsonBody<CreateUserReq>,
) -> ApiResult<Response> {
    let Json(req) = body?;

    let id = svc.create_user(req.into()).await?;
    Span::current().record("user_id", field::display(id));
    info!("User created");

    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/user/{id}"))]).into_response())
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "Malformed id", body = ErrorDetails),
        (status = 404, description = "User not found", body = ErrorDetails),
    )
)]
#[tracing::instrument(skip_all, fields(user_id = field::Empty))]
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    path: UserPath,
) -> ApiResult<Json<UserDto>> {
    let id = user_id(path)?;

    let user = svc.get_user(id).await?;
    Ok(Json(UserDto::from(user)))
}

/// Update the names of a user
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserReq,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Id mismatch, no fields to update or invalid body", body = ErrorDetails),
        (status = 404, description = "User not found", body = ErrorDetails),
    )
)]
#[tracing::instrument(skip_all, fields(user_id = field::Empty))]
pub async fn update_user(
    Extension(svc): Extension<Arc<Service>>,
    path: UserPath,
    body: JsonBody<UpdateUserReq>,
) -> ApiResult<StatusCode> {
    let id = user_id(path)?;
    let Json(req) = body?;

    if req.id != id {
        return Err(ApiError::bad_request(format!(
            "Body id {} does not match path id {id}",
            req.id
        )));
    }

    svc.update_user(id, req.into()).await?;
    info!("User updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Malformed id", body = ErrorDetails),
        (status = 404, description = "User not found", body = ErrorDetails),
    )
)]
#[tracing::instrument(skip_all, fields(user_id = field::Empty))]
pub async fn delete_user(
    Extension(svc): Extension<Arc<Service>>,
    path: UserPath,
) -> ApiResult<StatusCode> {
    let id = user_id(path)?;

    svc.delete_user(id).await?;
    info!("User deleted");
    Ok(StatusCode::OK)
}

/// Age of a user in whole years
#[utoipa::path(
    get,
    path = "/user/{id}/age",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Age in whole years", body = UserAgeDto),
        (status = 400, description = "Malformed id", body = ErrorDetails),
        (status = 404, description = "User not found", body = ErrorDetails),
    )
)]
#[tracing::instrument(skip_all, fields(user_id = field::Empty))]
pub async fn get_user_age(
    Extension(svc): Extension<Arc<Service>>,
    path: UserPath,
) -> ApiResult<Json<UserAgeDto>> {
    let id = user_id(path)?;

    let age = svc.get_user_age(id).await?;
    Ok(Json(UserAgeDto { age }))
}
