//! Health check endpoint handler.

use crate::api::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use crate::health::HealthResult;
use std::sync::Arc;
use std::time::Duration;

/// Run a check and render it.
///
/// The body is always the full result so operators can see why a node was
/// taken out of rotation without reading server logs. A check that overruns
/// `server.request_timeout_seconds` is reported as unhealthy.
pub async fn handle(State(state): State<Arc<AppState>>) -> Response {
    let seconds = state.config.server.request_timeout_seconds;
    let result =
        match tokio::time::timeout(Duration::from_secs(seconds), state.checker.check()).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(timeout_seconds = seconds, "Health check timed out");
                HealthResult::timed_out(seconds)
            }
        };

    let status = if result.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    match serde_json::to_vec(&result) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode health result");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Error while encoding JSON response: {}", e),
            )
                .into_response()
        }
    }
}
