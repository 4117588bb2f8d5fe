//! Router assembly.
//!
//! Routes orchestrate but don't contain business logic: handlers delegate to
//! `domain::service::Service`, which is injected as an `Extension`.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{BoxError, Extension, Json, Router};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api::rest::error::ApiError;
use crate::api::rest::handlers;
use crate::api::rest::openapi::UsersApiDoc;
use crate::domain::service::Service;

/// Build the users router.
///
/// Serves `/user`, `/user/{id}`, `/user/{id}/age` and `/openapi.json`.
pub fn router(service: Arc<Service>) -> Router {
    let doc = UsersApiDoc::openapi();

    Router::new()
        .route("/user", post(handlers::create_user))
        .route(
            "/user/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route("/user/{id}/age", get(handlers::get_user_age))
        .route(
            "/openapi.json",
            get(move || {
                let doc = doc.clone();
                async move { Json(doc) }
            }),
        )
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
}

/// Wrap `router` with a per-request deadline and panic recovery.
///
/// An elapsed deadline answers 408 and a panicking handler answers 500, both
/// with the regular error body.
#[must_use]
pub fn guarded(router: Router, request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(HandleErrorLayer::new(middleware_error))
            .layer(TimeoutLayer::new(request_timeout)),
    )
}

async fn middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        tracing::warn!("Request timed out");
        return ApiError::new(StatusCode::REQUEST_TIMEOUT, "Request timed out");
    }
    tracing::error!(error = %err, "Unhandled middleware error");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "")
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let reason = match payload.downcast::<String>() {
        Ok(msg) => *msg,
        Err(payload) => payload
            .downcast::<&'static str>()
            .map_or_else(|_| "non-string panic payload".to_owned(), |msg| (*msg).to_owned()),
    };
    tracing::error!(%reason, "Request handler panicked");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "").into_response()
}
