#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for `users` integration tests.
//!
//! Provides an in-memory database, deterministic clock and registry doubles,
//! and a fully wired module.

#![allow(dead_code)] // Support module provides utilities that may not all be used

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{Database, DatabaseConnection};
use time::OffsetDateTime;
use time::macros::datetime;

use users::UsersModule;
use users::domain::error::LookupError;
use users::domain::ports::{Clock, RegistryClient};
use users::domain::service::{Service, ServiceConfig};
use users::infra::storage::OrmUsersRepository;
use users_sdk::NewUser;

/// The instant every test clock reports unless a test chooses another.
pub const NOW: OffsetDateTime = datetime!(2023-02-12 10:00 UTC);

pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now_utc(&self) -> OffsetDateTime {
        self.0
    }
}

/// Registry double answering every lookup with the same result.
pub struct StaticRegistry {
    result: Result<Option<i32>, LookupError>,
    calls: AtomicUsize,
}

impl StaticRegistry {
    pub fn new(result: Result<Option<i32>, LookupError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn code(code: i32) -> Self {
        Self::new(Ok(Some(code)))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistryClient for StaticRegistry {
    async fn resolve(&self, _birth_number: &str) -> Result<Option<i32>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Registry double that answers only after the given delay.
pub struct SlowRegistry(pub Duration);

#[async_trait]
impl RegistryClient for SlowRegistry {
    async fn resolve(&self, _birth_number: &str) -> Result<Option<i32>, LookupError> {
        tokio::time::sleep(self.0).await;
        Ok(Some(1))
    }
}

/// Registry double that panics on every lookup.
pub struct PanickingRegistry;

#[async_trait]
impl RegistryClient for PanickingRegistry {
    async fn resolve(&self, _birth_number: &str) -> Result<Option<i32>, LookupError> {
        panic!("registry double exploded");
    }
}

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// Each call creates a new isolated database for testing.
pub async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");
    UsersModule::migrate(&db)
        .await
        .expect("Failed to run migrations");
    db
}

pub fn daniel() -> NewUser {
    NewUser {
        first_name: "Daniel".to_owned(),
        last_name: "Gurblanski".to_owned(),
        date_of_birth: datetime!(1989-10-14 0:00 UTC),
        birth_number: "8910141234".to_owned(),
    }
}

/// Module wired against an in-memory database with test doubles.
pub struct TestContext {
    pub db: DatabaseConnection,
    pub module: UsersModule,
    pub registry: Arc<StaticRegistry>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with(StaticRegistry::code(12345), NOW, ServiceConfig::default()).await
    }

    pub async fn with_registry(registry: StaticRegistry) -> Self {
        Self::with(registry, NOW, ServiceConfig::default()).await
    }

    pub async fn with(registry: StaticRegistry, now: OffsetDateTime, config: ServiceConfig) -> Self {
        let db = inmem_db().await;
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(now));
        let registry = Arc::new(registry);
        let repo = Arc::new(OrmUsersRepository::new(db.clone(), clock.clone()));
        let service = Service::new(repo, registry.clone(), clock, config);

        Self {
            db,
            module: UsersModule::from_service(service),
            registry,
        }
    }
}

/// Module over an in-memory database with an arbitrary registry client.
pub async fn module_with_registry(registry: Arc<dyn RegistryClient>) -> UsersModule {
    let db = inmem_db().await;
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(NOW));
    let repo = Arc::new(OrmUsersRepository::new(db, clock.clone()));
    UsersModule::from_service(Service::new(
        repo,
        registry,
        clock,
        ServiceConfig::default(),
    ))
}
