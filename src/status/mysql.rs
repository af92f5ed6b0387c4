//! MySQL / MariaDB status source.

use super::{FieldKind, StatusError, StatusField, StatusSource};
use crate::config::MySqlConfig;
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::Row;
use std::time::Duration;

/// Reads status fields from a live server with `SHOW STATUS` and
/// `SHOW GLOBAL VARIABLES`.
pub struct MySqlStatusSource {
    pool: MySqlPool,
    acquire_timeout_seconds: u64,
}

impl MySqlStatusSource {
    /// Build a source with a lazily connected pool.
    ///
    /// No connection is attempted here, so the health endpoint can come up
    /// (and report the failure) while the database is still down.
    pub fn connect_lazy(config: &MySqlConfig) -> Self {
        let mut options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password);
        if let Some(socket) = &config.socket {
            options = options.socket(socket);
        }

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect_lazy_with(options);

        tracing::debug!(
            host = %config.host,
            port = config.port,
            socket = ?config.socket,
            user = %config.user,
            "Created lazy MySQL pool"
        );

        Self::with_pool(pool, config.connect_timeout_seconds)
    }

    /// Wrap an existing pool.
    pub fn with_pool(pool: MySqlPool, acquire_timeout_seconds: u64) -> Self {
        Self {
            pool,
            acquire_timeout_seconds,
        }
    }

    /// The statement used to look up `field`.
    pub fn query_for(field: StatusField) -> String {
        match field.kind() {
            FieldKind::Status => format!("SHOW STATUS LIKE '{}'", field.name()),
            FieldKind::Variable => format!("SHOW GLOBAL VARIABLES LIKE '{}'", field.name()),
        }
    }

}

/// Map a driver error from looking up `field` to a [`StatusError`].
///
/// An empty result set means the server does not report the field.
fn map_error(field: StatusField, acquire_timeout_seconds: u64, e: sqlx::Error) -> StatusError {
    match e {
        sqlx::Error::RowNotFound => StatusError::NotFound(field.name().to_string()),
        sqlx::Error::PoolTimedOut => StatusError::Timeout(acquire_timeout_seconds),
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolClosed => {
            StatusError::Connection(e.to_string())
        }
        other => StatusError::Query(other.to_string()),
    }
}

#[async_trait]
impl StatusSource for MySqlStatusSource {
    async fn get_value(&self, field: StatusField) -> Result<String, StatusError> {
        let sql = Self::query_for(field);

        // SHOW statements go over the text protocol; not every server version
        // accepts them as prepared statements.
        let row = sqlx::raw_sql(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_error(field, self.acquire_timeout_seconds, e))?;

        row.try_get::<String, _>(1)
            .map_err(|e| StatusError::Query(e.to_string()))
    }
}
