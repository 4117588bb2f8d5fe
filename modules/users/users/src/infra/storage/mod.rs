//! Infrastructure storage layer - database persistence.
//!
//! This module contains ALL SeaORM-specific code and database operations:
//! - `entity/` - SeaORM entity definitions
//! - `mapper.rs` - Conversions between SeaORM models and SDK contract types
//! - `migrations/` - Database schema migrations

pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;
mod users_sea_repo;

pub use users_sea_repo::OrmUsersRepository;
