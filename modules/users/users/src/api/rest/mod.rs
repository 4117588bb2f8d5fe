//! REST adapter for the users module.
//!
//! - `dto` - camelCase request/response bodies
//! - `error` - domain error to `{statusCode, message}` mapping
//! - `handlers` - axum handlers delegating to `domain::service::Service`
//! - `routes` - router assembly
//! - `openapi` - generated `OpenAPI` document

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
