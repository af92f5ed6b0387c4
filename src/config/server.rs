//! HTTP server configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default pid file location
pub const DEFAULT_PIDFILE: &str = "/var/run/galera-healthcheck.pid";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on a single check request, database round trips included
    pub request_timeout_seconds: u64,
    /// Where to write the process id; `None` disables the pid file
    pub pidfile: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_seconds: 10,
            pidfile: Some(PathBuf::from(DEFAULT_PIDFILE)),
        }
    }
}
