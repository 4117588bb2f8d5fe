#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use time::OffsetDateTime;
use users_sdk::User;
use uuid::Uuid;

use crate::domain::error::{DomainError, LookupError};
use crate::domain::ports::{Clock, RegistryClient};
use crate::domain::repos::UsersRepository;
use crate::domain::service::{Service, ServiceConfig};

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

/// Map-backed repository that counts every call.
pub struct InMemoryUsersRepository {
    users: Mutex<HashMap<Uuid, User>>,
    calls: AtomicUsize,
    clock: Arc<dyn Clock>,
}

impl InMemoryUsersRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            clock,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn stored(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn add(&self, mut user: User) -> Result<User, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        user.created_at = self.clock.now_utc();
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, mut user: User) -> Result<User, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        user.modified_at = Some(self.clock.now_utc());
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn remove(&self, user: &User) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.users.lock().unwrap().remove(&user.id);
        Ok(())
    }
}

/// Repository double failing every call like a lost connection.
pub struct BrokenUsersRepository;

#[async_trait]
impl UsersRepository for BrokenUsersRepository {
    async fn get(&self, _id: Uuid) -> Result<Option<User>, DomainError> {
        Err(DomainError::database("connection refused"))
    }

    async fn add(&self, _user: User) -> Result<User, DomainError> {
        Err(DomainError::database("connection refused"))
    }

    async fn update(&self, _user: User) -> Result<User, DomainError> {
        Err(DomainError::database("connection refused"))
    }

    async fn remove(&self, _user: &User) -> Result<(), DomainError> {
        Err(DomainError::database("connection refused"))
    }
}

pub struct Harness {
    pub service: Service,
    pub repo: Arc<InMemoryUsersRepository>,
    pub registry: Arc<StaticRegistry>,
}

pub fn harness(registry: StaticRegistry, now: OffsetDateTime) -> Harness {
    harness_with_config(registry, now, ServiceConfig::default())
}

pub fn harness_with_config(
    registry: StaticRegistry,
    now: OffsetDateTime,
    config: ServiceConfig,
) -> Harness {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(now));
    let repo = Arc::new(InMemoryUsersRepository::new(clock.clone()));
    let registry = Arc::new(registry);
    let service = Service::new(repo.clone(), registry.clone(), clock, config);
    Harness {
        service,
        repo,
        registry,
    }
}
