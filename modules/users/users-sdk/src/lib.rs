//! Users SDK
//!
//! This crate provides the public API for the `users` module:
//! - `UsersClientV1` trait
//! - Model types for users (`User`, `NewUser`, `UserPatch`, `UserView`)
//! - Error type (`UsersError`)
//!
//! ## Usage
//!
//! The module hands out an implementation of the client trait:
//! ```ignore
//! use users_sdk::UsersClientV1;
//!
//! let client: Arc<dyn UsersClientV1> = module.client();
//!
//! let id = client.create_user(new_user).await?;
//! let user = client.get_user(id).await?;
//! let age = client.get_user_age(id).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod errors;
pub mod models;

pub use client::UsersClientV1;
pub use errors::UsersError;
pub use models::{NewUser, UpdateUserRequest, User, UserPatch, UserView};
