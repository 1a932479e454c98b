//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, an optional TOML file,
//! `MOAFINDER_*` environment variables and finally the platform `PORT`
//! variable that hosting providers inject.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Settings are out of range
    #[error("Validation error: {0}")]
    Validation(String),
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Listening port
    pub port: u16,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl ServerConfig {
    /// `host:port` string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Validation("Host cannot be empty".to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError::Validation(
                "Port must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_filter: "info".to_string(),
        }
    }
}

/// Loads [`ServerConfig`] from its layered sources
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
    /// Honor the bare `PORT` variable
    platform_port: bool,
}

impl ConfigLoader {
    /// Loader using `MOAFINDER_CONFIG` or `moafinder.toml`
    pub fn new() -> Self {
        Self {
            config_path: std::env::var("MOAFINDER_CONFIG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("moafinder.toml")),
            env_prefix: "MOAFINDER".to_string(),
            platform_port: true,
        }
    }

    /// Use a specific config file
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    /// Use a different environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Ignore the bare `PORT` variable
    pub fn without_platform_port(mut self) -> Self {
        self.platform_port = false;
        self
    }

    /// Merge every source and validate the result
    pub fn load(&self) -> Result<ServerConfig, ConfigError> {
        let defaults = ServerConfig::default();
        let mut builder = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_filter", defaults.log_filter)?
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix));

        if self.platform_port {
            if let Ok(port) = std::env::var("PORT") {
                builder = builder.set_override("port", port)?;
            }
        }

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
