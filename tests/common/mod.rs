//! Shared test utilities for galera-healthcheck integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use galera_healthcheck::api::{create_router, AppState};
use galera_healthcheck::config::AppConfig;
use galera_healthcheck::health::{HealthCheckConfig, HealthChecker};
use galera_healthcheck::status::{StaticStatusSource, StatusError, StatusField, StatusSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A source reporting a synced, primary, writable node.
pub fn synced_node() -> StaticStatusSource {
    StaticStatusSource::new()
        .with_value(StatusField::WsrepLocalState, "4")
        .with_value(StatusField::WsrepLocalStateComment, "Synced")
        .with_value(StatusField::WsrepClusterConfId, "15")
        .with_value(StatusField::WsrepClusterSize, "3")
        .with_value(StatusField::WsrepClusterStateUuid, "1234-5678-90ab")
        .with_value(StatusField::WsrepClusterStatus, "Primary")
        .with_value(StatusField::WsrepConnected, "ON")
        .with_value(StatusField::WsrepReady, "ON")
        .with_value(StatusField::ReadOnly, "OFF")
}

pub fn make_checker(source: impl StatusSource, config: HealthCheckConfig) -> HealthChecker {
    HealthChecker::new(Arc::new(source), config)
}

/// Router over `source` with default server settings.
pub fn make_app(source: impl StatusSource, config: HealthCheckConfig) -> axum::Router {
    make_app_with(source, config, AppConfig::default())
}

pub fn make_app_with(
    source: impl StatusSource,
    health: HealthCheckConfig,
    mut app_config: AppConfig,
) -> axum::Router {
    app_config.health = health;
    let checker = make_checker(source, health);
    let state = Arc::new(AppState::new(checker, Arc::new(app_config)));
    create_router(state)
}

/// Wraps another source, counting lookups and optionally delaying each one.
pub struct InstrumentedSource<S> {
    inner: S,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl<S: StatusSource> InstrumentedSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl<S: StatusSource> StatusSource for InstrumentedSource<S> {
    async fn get_value(&self, field: StatusField) -> Result<String, StatusError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.inner.get_value(field).await
    }
}
