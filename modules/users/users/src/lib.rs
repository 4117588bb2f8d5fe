//! Users Module
//!
//! This module provides user management with registry ("Ruian") code
//! enrichment, a REST API and database storage.
//!
//! ## Public API
//!
//! The public API is defined in the `users-sdk` crate and re-exported here:
//! - `UsersClientV1` - trait for inter-module communication
//! - `User`, `NewUser`, `UserPatch`, `UpdateUserRequest`, `UserView` - data models
//! - `UsersError` - error types
//!
//! Consumers build the module with [`UsersModule::build`] and call
//! [`UsersModule::client`] to obtain the client.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// === PUBLIC API (from SDK) ===
pub use users_sdk::{
    NewUser, UpdateUserRequest, User, UserPatch, UserView, UsersClientV1, UsersError,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::UsersModule;

// === LOCAL CLIENT ===
// Local client adapter that implements UsersClientV1
pub mod local_client;

// === INTERNAL MODULES ===
// WARNING: These modules are internal implementation details!
// They are exposed only for comprehensive testing and should NOT be used by external consumers.
// Only use the SDK types for stable public APIs.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

#[cfg(test)]
pub(crate) mod test_support;
