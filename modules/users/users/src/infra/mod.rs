//! Infrastructure adapters implementing the domain ports.
//!
//! - `storage` - SeaORM entity, migrations and the `UsersRepository` implementation
//! - `registry` - registry code lookups over HTTP, plus a stub for load tests
//! - `clock` - wall clock

pub mod clock;
pub mod registry;
pub mod storage;
