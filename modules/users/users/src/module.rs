use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};
use users_sdk::UsersClientV1;

use crate::api::rest::routes;
use crate::config::{RegistryMode, UsersConfig};
use crate::domain::ports::{Clock, RegistryClient};
use crate::domain::repos::UsersRepository;
use crate::domain::service::Service;
use crate::infra::clock::SystemClock;
use crate::infra::registry::{HttpRegistryClient, StubRegistryClient};
use crate::infra::storage::OrmUsersRepository;
use crate::infra::storage::migrations::Migrator;
use crate::local_client::UsersLocalClient;

/// Composition root of the users module.
///
/// Owns the domain service and hands out the REST router and the in-process client.
#[derive(Clone)]
pub struct UsersModule {
    service: Arc<Service>,
}

impl UsersModule {
    /// Wire the production adapters: SeaORM storage, the configured registry client
    /// and the system clock.
    ///
    /// # Errors
    /// Returns an error when the configuration is invalid or the registry HTTP client
    /// cannot be built.
    pub fn build(cfg: &UsersConfig, db: DatabaseConnection) -> anyhow::Result<Self> {
        info!("Initializing users module");
        cfg.validate()?;

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let registry: Arc<dyn RegistryClient> = match cfg.registry.mode {
            RegistryMode::Http => {
                let base_url = cfg.registry.base_url()?;
                debug!(
                    base_url = %base_url,
                    timeout = ?cfg.registry.timeout,
                    "Using HTTP registry client"
                );
                Arc::new(
                    HttpRegistryClient::new(base_url, cfg.registry.timeout)
                        .context("failed to build registry HTTP client")?,
                )
            }
            RegistryMode::Stub => {
                info!("Using stub registry client, codes are random");
                Arc::new(StubRegistryClient::default())
            }
        };

        let repo: Arc<dyn UsersRepository> =
            Arc::new(OrmUsersRepository::new(db, Arc::clone(&clock)));

        let service = Service::new(repo, registry, clock, cfg.service_config());
        Ok(Self::from_service(service))
    }

    /// Wrap an already assembled service.
    #[must_use]
    pub fn from_service(service: Service) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Apply the module's schema migrations.
    ///
    /// # Errors
    /// Returns an error if a migration fails.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running users database migrations");
        Migrator::up(db, None)
            .await
            .context("users migrations failed")?;
        info!("Users database migrations completed successfully");
        Ok(())
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    /// REST routes of the module.
    #[must_use]
    pub fn router(&self) -> axum::Router {
        info!("Registering users REST routes");
        routes::router(self.service())
    }

    /// REST routes behind the request deadline and panic recovery, ready to serve.
    #[must_use]
    pub fn app(&self, request_timeout: Duration) -> axum::Router {
        routes::guarded(self.router(), request_timeout)
    }

    /// In-process client implementing the SDK trait.
    #[must_use]
    pub fn client(&self) -> Arc<dyn UsersClientV1> {
        Arc::new(UsersLocalClient::new(self.service()))
    }
}
