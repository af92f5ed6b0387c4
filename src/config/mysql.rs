//! Database connection configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How to reach the local database node
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MySqlConfig {
    pub host: String,
    pub port: u16,
    /// Unix socket path; takes precedence over host/port when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket: Option<PathBuf>,
    pub user: String,
    pub password: String,
    pub connect_timeout_seconds: u64,
    pub max_connections: u32,
}

impl Default for MySqlConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3306,
            socket: None,
            user: String::new(),
            password: String::new(),
            connect_timeout_seconds: 5,
            max_connections: 4,
        }
    }
}

// Keeps the password out of `?config` log lines.
impl fmt::Debug for MySqlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("socket", &self.socket)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_config_defaults() {
        let config = MySqlConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3306);
        assert!(config.socket.is_none());
        assert!(config.user.is_empty());
        assert_eq!(config.connect_timeout_seconds, 5);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = MySqlConfig {
            password: "hunter2".to_string(),
            ..MySqlConfig::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
