use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::service::{MissingRegistryCodePolicy, ServiceConfig};

/// Configuration for the users module
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Policy applied when the registry answers without a code.
    #[serde(default)]
    pub missing_registry_code: MissingRegistryCodePolicy,
}

/// Which registry adapter to wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryMode {
    #[default]
    Http,
    /// Random codes without network access, for load tests.
    Stub,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub mode: RegistryMode,
    #[serde(default = "default_registry_base_url")]
    pub base_url: String,
    #[serde(default = "default_registry_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            mode: RegistryMode::default(),
            base_url: default_registry_base_url(),
            timeout: default_registry_timeout(),
        }
    }
}

fn default_registry_base_url() -> String {
    "http://localhost:5000".to_owned()
}

fn default_registry_timeout() -> Duration {
    Duration::from_secs(5)
}

impl RegistryConfig {
    /// Parsed registry base URL.
    ///
    /// # Errors
    /// Returns an error when the URL is malformed or cannot carry a path.
    pub fn base_url(&self) -> anyhow::Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("invalid users.registry.base_url: {e}"))?;
        if url.cannot_be_a_base() {
            anyhow::bail!("users.registry.base_url '{url}' cannot be used as a base URL");
        }
        Ok(url)
    }
}

impl UsersConfig {
    /// # Errors
    /// Returns an error when the registry timeout is zero or the base URL is invalid.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.registry.timeout.is_zero() {
            anyhow::bail!("users.registry.timeout must be greater than zero");
        }
        if self.registry.mode == RegistryMode::Http {
            self.registry.base_url()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            missing_registry_code: self.missing_registry_code,
        }
    }
}
