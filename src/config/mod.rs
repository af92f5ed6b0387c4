//! Configuration module for galera-healthcheck
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`MYSQL_USER`, `MYSQL_PASSWORD`, `GALERA_HEALTHCHECK_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use galera_healthcheck::config::AppConfig;
//!
//! let config = AppConfig::default();
//! assert_eq!(config.server.port, 8080);
//!
//! let toml = r#"
//! [health]
//! available_when_donor = false
//! "#;
//! let config: AppConfig = toml::from_str(toml).unwrap();
//! assert!(!config.health.available_when_donor);
//! ```

pub mod error;
pub mod logging;
pub mod mysql;
pub mod server;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use mysql::MySqlConfig;
pub use server::ServerConfig;

// Re-export HealthCheckConfig from health module
pub use crate::health::HealthCheckConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for settings without a conventional name
pub const ENV_PREFIX: &str = "GALERA_HEALTHCHECK_";

/// Unified configuration for the healthcheck server.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Database connection
    pub mysql: MySqlConfig,
    /// Availability policy
    pub health: HealthCheckConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Parse a boolean the way shell users write them.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(format!("{}{}", ENV_PREFIX, name)).ok()
}

impl AppConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are silently ignored (the previous value is kept).
    pub fn with_env_overrides(mut self) -> Self {
        // Database credentials use the conventional client variable names
        if let Ok(user) = std::env::var("MYSQL_USER") {
            self.mysql.user = user;
        }
        if let Ok(password) = std::env::var("MYSQL_PASSWORD") {
            self.mysql.password = password;
        }
        if let Some(host) = env_var("MYSQL_HOST") {
            self.mysql.host = host;
        }
        if let Some(socket) = env_var("MYSQL_SOCKET") {
            self.mysql.socket = Some(socket.into());
        }

        // Server settings
        if let Some(port) = env_var("PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(host) = env_var("HOST") {
            self.server.host = host;
        }

        // Logging settings
        if let Some(level) = env_var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = env_var("LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        // Availability policy
        if let Some(b) = env_var("AVAIL_WHEN_DONOR").as_deref().and_then(parse_bool) {
            self.health.available_when_donor = b;
        }
        if let Some(b) = env_var("AVAIL_WHEN_READ_ONLY").as_deref().and_then(parse_bool) {
            self.health.available_when_read_only = b;
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }
        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "server.request_timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }

        if self.mysql.user.is_empty() {
            return Err(ConfigError::MissingField("mysql.user".to_string()));
        }
        if self.mysql.max_connections == 0 {
            return Err(ConfigError::Validation {
                field: "mysql.max_connections".to_string(),
                message: "pool needs at least one connection".to_string(),
            });
        }

        Ok(())
    }
}

/// Serializes tests that read or write process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
