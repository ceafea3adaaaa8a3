//! API configuration module.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `STOREFRONT_*` environment variables.
//!
//! ## Sources
//! ```text
//! defaults ──► storefront.toml (or $STOREFRONT_CONFIG, optional) ──► STOREFRONT_* env
//!   lowest                                                              highest
//! ```

use std::env;
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use storefront_db::DbConfig;

/// File consulted when `STOREFRONT_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "storefront.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "STOREFRONT";

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind the HTTP listener to
    pub bind_address: String,

    /// HTTP server port
    pub http_port: u16,

    /// SQLite database file (`:memory:` for a throwaway database)
    pub database_path: String,

    /// Maximum pooled SQLite connections
    pub db_max_connections: u32,

    /// Seconds to wait for a pooled connection
    pub db_acquire_timeout_secs: u64,

    /// JWT secret key for signing tokens
    pub jwt_secret: String,

    /// JWT access token lifetime in seconds
    pub jwt_access_lifetime_secs: i64,
}

impl ApiConfig {
    /// Load configuration from the default sources.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            env::var("STOREFRONT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_sources(Some(&path), Environment::with_prefix(ENV_PREFIX))
    }

    /// Builds a configuration from an optional TOML file and an environment source.
    pub fn from_sources(file: Option<&str>, environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("bind_address", "0.0.0.0")?
            .set_default("http_port", 8080_i64)?
            .set_default("database_path", "./storefront.db")?
            .set_default("db_max_connections", 5_i64)?
            .set_default("db_acquire_timeout_secs", 30_i64)?
            // In production, this MUST be overridden
            .set_default("jwt_secret", "storefront-dev-secret-change-in-production")?
            .set_default("jwt_access_lifetime_secs", 3600_i64)?; // 1 hour

        if let Some(path) = file {
            builder = builder.add_source(File::new(path, FileFormat::Toml).required(false));
        }

        let config: ApiConfig = builder
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values the type system can't.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http_port == 0 {
            return Err(ConfigError::InvalidValue("http_port".to_string()));
        }
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingRequired("jwt_secret".to_string()));
        }
        if self.jwt_access_lifetime_secs <= 0 {
            return Err(ConfigError::InvalidValue("jwt_access_lifetime_secs".to_string()));
        }
        if self.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("db_max_connections".to_string()));
        }
        Ok(())
    }

    /// `host:port` for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.http_port)
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        if self.database_path == ":memory:" {
            return DbConfig::in_memory();
        }

        DbConfig::new(&self.database_path)
            .max_connections(self.db_max_connections)
            .connect_timeout(Duration::from_secs(self.db_acquire_timeout_secs))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
