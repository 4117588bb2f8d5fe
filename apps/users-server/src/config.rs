//! Layered server configuration.
//!
//! Sources, lowest to highest precedence: built-in defaults, the optional
//! YAML file, `USERS__*` environment variables, then CLI overrides.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use users::config::UsersConfig;

/// Environment prefix; `__` separates nested keys (`USERS__SERVER__PORT`).
pub const ENV_PREFIX: &str = "USERS__";

const MOCK_DATABASE_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub users: UsersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for a whole request, e.g. `30s`.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    /// # Errors
    /// Returns an error when `host:port` is not a socket address.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    /// Run schema migrations on startup.
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://users.db?mode=rwc".to_owned(),
            auto_migrate: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` wins when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Values taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
    pub mock: bool,
}

impl AppConfig {
    /// Figment with every layer except CLI overrides.
    #[must_use]
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = config_path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    /// Returns an error when a layer cannot be read or does not match the schema.
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        Self::figment(config_path)
            .extract()
            .context("failed to load configuration")
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if cli.mock {
            MOCK_DATABASE_URL.clone_into(&mut self.database.url);
            self.database.auto_migrate = true;
        }
        let level = match cli.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.level);
        }
    }

    /// # Errors
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server.bind_addr()?;
        if self.server.request_timeout.is_zero() {
            anyhow::bail!("server.request_timeout must be greater than zero");
        }
        if self.database.url.trim().is_empty() {
            anyhow::bail!("database.url must not be empty");
        }
        self.users.validate()
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use users::config::RegistryMode;
    use users::domain::service::MissingRegistryCodePolicy;

    #[test]
    fn defaults_without_any_source() {
        Jail::expect_with(|_jail| {
            let cfg = AppConfig::load(None).expect("defaults load");

            assert_eq!(cfg.server.host, "127.0.0.1");
            assert_eq!(cfg.server.port, 8080);
            assert_eq!(cfg.server.request_timeout, Duration::from_secs(30));
            assert_eq!(cfg.database.url, "sqlite://users.db?mode=rwc");
            assert!(cfg.database.auto_migrate);
            assert_eq!(cfg.logging.format, LogFormat::Text);
            assert_eq!(cfg.users.registry.mode, RegistryMode::Http);
            assert_eq!(cfg.users.registry.base_url, "http://localhost:5000");
            cfg.validate().expect("defaults are valid");
            Ok(())
        });
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "users.yaml",
                r"
server:
  host: 0.0.0.0
  port: 9000
  request_timeout: 10s
logging:
  level: debug
  format: json
users:
  registry:
    base_url: http://registry.internal:5000
    timeout: 2s
  missing_registry_code: store_null
",
            )?;

            let cfg = AppConfig::load(Some(Path::new("users.yaml"))).expect("yaml loads");

            assert_eq!(cfg.server.host, "0.0.0.0");
            assert_eq!(cfg.server.port, 9000);
            assert_eq!(cfg.server.request_timeout, Duration::from_secs(10));
            assert_eq!(cfg.logging.format, LogFormat::Json);
            assert_eq!(cfg.users.registry.base_url, "http://registry.internal:5000");
            assert_eq!(cfg.users.registry.timeout, Duration::from_secs(2));
            assert_eq!(
                cfg.users.missing_registry_code,
                MissingRegistryCodePolicy::StoreNull
            );
            // Untouched sections keep their defaults.
            assert_eq!(cfg.database.url, "sqlite://users.db?mode=rwc");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_yaml() {
        Jail::expect_with(|jail| {
            jail.create_file("users.yaml", "server:\n  port: 9000\n")?;
            jail.set_env("USERS__SERVER__PORT", "9100");
            jail.set_env("USERS__USERS__REGISTRY__MODE", "stub");

            let cfg = AppConfig::load(Some(Path::new("users.yaml"))).expect("env loads");

            assert_eq!(cfg.server.port, 9100);
            assert_eq!(cfg.users.registry.mode, RegistryMode::Stub);
            Ok(())
        });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("users.yaml", "server:\n  prot: 9000\n")?;

            assert!(AppConfig::load(Some(Path::new("users.yaml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn cli_overrides_win() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(&CliOverrides {
            port: Some(7070),
            verbose: 2,
            mock: true,
        });

        assert_eq!(cfg.server.port, 7070);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.database.url, "sqlite::memory:");
    }

    #[test]
    fn validation_catches_bad_values() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".to_owned();
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.users.registry.timeout = Duration::ZERO;
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.users.registry.base_url = "::nonsense".to_owned();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn printed_config_is_json() {
        let json = AppConfig::default().to_json().expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["server"]["request_timeout"], "30s");
        assert_eq!(value["users"]["missing_registry_code"], "reject");
    }
}
