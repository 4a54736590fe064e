//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! `config/default.toml`, an optional environment overlay, and `RECRUIT__*`
//! environment variables. Each sub-module represents a logical section.

pub mod app;
pub mod auth;
pub mod client;
pub mod database;
pub mod logging;
pub mod mail;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::client::ClientConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::mail::MailConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`RECRUIT__MAIL__HOST`, ...).
pub const ENV_PREFIX: &str = "RECRUIT";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Token and credential settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Outgoing mail settings.
    #[serde(default)]
    pub mail: MailConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Settings used by the client and CLI.
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default`, `config/{env}` and environment variables
    /// prefixed with `RECRUIT__`. Missing files are not an error.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from an explicit directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(dir.path().to_str().unwrap(), "test").unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.mail.port, 587);
        assert_eq!(cfg.mail.from, "noreply@example.com");
        assert_eq!(cfg.client.api_url, "http://localhost:3000");
        assert_eq!(cfg.database.provider, "postgres");
    }

    #[test]
    fn overlay_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 4000\n[mail]\nenabled = true\nhost = \"smtp.example.com\"\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("staging.toml"), "[server]\nport = 5000\n").unwrap();

        let cfg = AppConfig::load_from(dir.path().to_str().unwrap(), "staging").unwrap();
        assert_eq!(cfg.server.port, 5000);
        assert!(cfg.mail.enabled);
        assert_eq!(cfg.mail.host, "smtp.example.com");
    }
}
