//! Node health evaluation.
//!
//! This module turns a snapshot of a Galera node's replication status into a
//! yes/no answer for load balancers, together with the raw values and any
//! diagnostic messages explaining a "no".

mod config;
mod state;


pub use config::*;
pub use state::*;

use crate::status::{StatusField, StatusSource};
use std::sync::Arc;

/// Evaluates the health of one database node.
///
/// Holds no mutable state, so a single instance can serve concurrent checks.
#[derive(Clone)]
pub struct HealthChecker {
    /// Where status values come from
    source: Arc<dyn StatusSource>,
    /// Availability policy
    config: HealthCheckConfig,
}

impl HealthChecker {
    pub fn new(source: Arc<dyn StatusSource>, config: HealthCheckConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &HealthCheckConfig {
        &self.config
    }

    /// Run one check.
    ///
    /// Never fails: lookup errors become entries in `messages` and force an
    /// unhealthy verdict.
    pub async fn check(&self) -> HealthResult {
        let mut result = self.collect().await;
        self.evaluate(&mut result);

        tracing::debug!(
            healthy = result.healthy,
            local_state = %result.local_state,
            cluster_status = %result.cluster_status,
            read_only = %result.read_only,
            messages = result.messages.len(),
            "Health check completed"
        );

        result
    }

    /// Fetch every field in declaration order.
    ///
    /// An absent field gets [`MISSING_VALUE`]. A failed lookup leaves the slot
    /// empty, records a message and moves on to the next field.
    async fn collect(&self) -> HealthResult {
        let mut result = HealthResult::default();

        for field in StatusField::ALL {
            match self.source.get_value(field).await {
                Ok(value) => *result.slot_mut(field) = value,
                Err(e) if e.is_not_found() => {
                    *result.slot_mut(field) = MISSING_VALUE.to_string();
                }
                Err(e) => {
                    tracing::warn!(field = %field, error = %e, "Status lookup failed");
                    result
                        .messages
                        .push(format!("Could not get {} value: {}", field, e));
                }
            }
        }

        result
    }

    /// Apply the decision rules to a collected result.
    fn evaluate(&self, result: &mut HealthResult) {
        if !result.messages.is_empty() {
            return;
        }

        let eligible = match result.local_state() {
            LocalState::Synced => true,
            LocalState::DonorDesynced => self.config.available_when_donor,
            LocalState::Joining | LocalState::Joined | LocalState::Other(_) => false,
        };
        if !eligible {
            return;
        }

        if result.is_primary() {
            result.healthy = true;
        } else {
            result.messages.push(MSG_NOT_PRIMARY.to_string());
        }

        if !self.config.available_when_read_only && result.is_read_only() {
            result.healthy = false;
            result.messages.push(MSG_READ_ONLY.to_string());
        }
    }
}
