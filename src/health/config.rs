//! Configuration for health evaluation.

use serde::{Deserialize, Serialize};

/// Availability policy for node states that are usable but not ideal.
///
/// Set once at startup; the evaluator copies it and never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthCheckConfig {
    /// Whether a donor/desynced node may still be reported healthy
    pub available_when_donor: bool,
    /// Whether a node with `read_only = ON` may still be reported healthy
    pub available_when_read_only: bool,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            available_when_donor: true,
            available_when_read_only: false,
        }
    }
}
