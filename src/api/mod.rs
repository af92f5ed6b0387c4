//! # HTTP front end
//!
//! Serves the node's health verdict to load balancers and orchestration
//! probes.
//!
//! ## Endpoints
//!
//! - `GET /` (and every other path) - run a check; `200` when healthy,
//!   `503` otherwise, body is the JSON-encoded [`HealthResult`](crate::health::HealthResult).
//!   A check that overruns `server.request_timeout_seconds` answers `503` with
//!   a timeout message.
//!
//! ## Example
//!
//! ```no_run
//! use galera_healthcheck::api::{create_router, AppState};
//! use galera_healthcheck::config::AppConfig;
//! use galera_healthcheck::health::HealthChecker;
//! use galera_healthcheck::status::MySqlStatusSource;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Arc::new(AppConfig::default());
//! let source = Arc::new(MySqlStatusSource::connect_lazy(&config.mysql));
//! let checker = HealthChecker::new(source, config.health);
//!
//! let state = Arc::new(AppState::new(checker, config));
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

mod health;

use crate::config::AppConfig;
use crate::health::HealthChecker;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub checker: Arc<HealthChecker>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(checker: HealthChecker, config: Arc<AppConfig>) -> Self {
        Self {
            checker: Arc::new(checker),
            config,
        }
    }
}

/// Create the router. Every path serves the health check.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::handle))
        .fallback(health::handle)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
