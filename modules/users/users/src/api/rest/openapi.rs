use utoipa::OpenApi;

use crate::api::rest::dto::{CreateUserReq, UpdateUserReq, UserAgeDto, UserDto};
use crate::api::rest::error::ErrorDetails;
use crate::api::rest::handlers;

/// `OpenAPI` document for the users REST API.
#[derive(OpenApi)]
#[openapi(
    info(title = "Users API", description = "User management with registry code enrichment"),
    paths(
        handlers::create_user,
        handlers::get_user,
        handlers::update_user,
        handlers::delete_user,
        handlers::get_user_age,
    ),
    components(schemas(CreateUserReq, UpdateUserReq, UserDto, UserAgeDto, ErrorDetails)),
    tags((name = "users", description = "User lifecycle"))
)]
pub struct UsersApiDoc;
