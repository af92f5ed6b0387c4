//! Health result and replication state types.

use serde::Serialize;

/// Placeholder stored for a field the server does not report.
pub const MISSING_VALUE: &str = "--";

/// `wsrep_cluster_status` value of a node in the primary component.
pub const PRIMARY_COMPONENT: &str = "Primary";

/// `read_only` value of a read-only server.
pub const READ_ONLY_ON: &str = "ON";

pub const MSG_NOT_PRIMARY: &str = "Node is not part of the primary component!";
pub const MSG_READ_ONLY: &str = "Node is read-only";

/// Galera `wsrep_local_state` codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalState {
    /// `1`
    Joining,
    /// `2`, serving a state transfer
    DonorDesynced,
    /// `3`
    Joined,
    /// `4`
    Synced,
    /// Anything else, including the missing-value placeholder
    Other(String),
}

impl LocalState {
    /// Parse a raw status value. Matching is exact; no trimming.
    pub fn parse(value: &str) -> Self {
        match value {
            "1" => LocalState::Joining,
            "2" => LocalState::DonorDesynced,
            "3" => LocalState::Joined,
            "4" => LocalState::Synced,
            other => LocalState::Other(other.to_string()),
        }
    }
}

/// Outcome of one health check.
///
/// `healthy == true` always comes with an empty `messages` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HealthResult {
    pub healthy: bool,
    #[serde(rename = "wsrep_cluster_conf_id")]
    pub cluster_conf_id: String,
    #[serde(rename = "wsrep_cluster_size")]
    pub cluster_size: String,
    #[serde(rename = "wsrep_cluster_state_uuid")]
    pub cluster_state_uuid: String,
    #[serde(rename = "wsrep_cluster_status")]
    pub cluster_status: String,
    #[serde(rename = "wsrep_connected")]
    pub connected: String,
    #[serde(rename = "wsrep_local_state")]
    pub local_state: String,
    #[serde(rename = "wsrep_local_state_comment")]
    pub local_state_comment: String,
    pub messages: Vec<String>,
    pub read_only: String,
    #[serde(rename = "wsrep_ready")]
    pub ready: String,
}

impl HealthResult {
    /// Unhealthy result for a check that did not finish within `seconds`.
    pub fn timed_out(seconds: u64) -> Self {
        Self {
            messages: vec![format!("Health check timed out after {}s", seconds)],
            ..Self::default()
        }
    }

    /// Parsed form of `local_state`.
    pub fn local_state(&self) -> LocalState {
        LocalState::parse(&self.local_state)
    }

    pub fn is_primary(&self) -> bool {
        self.cluster_status == PRIMARY_COMPONENT
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only == READ_ONLY_ON
    }

    /// Mutable slot for a collected field.
    pub(crate) fn slot_mut(&mut self, field: crate::status::StatusField) -> &mut String {
        use crate::status::StatusField;

        match field {
            StatusField::WsrepLocalState => &mut self.local_state,
            StatusField::WsrepLocalStateComment => &mut self.local_state_comment,
            StatusField::WsrepClusterConfId => &mut self.cluster_conf_id,
            StatusField::WsrepClusterSize => &mut self.cluster_size,
            StatusField::WsrepClusterStateUuid => &mut self.cluster_state_uuid,
            StatusField::WsrepClusterStatus => &mut self.cluster_status,
            StatusField::WsrepConnected => &mut self.connected,
            StatusField::WsrepReady => &mut self.ready,
            StatusField::ReadOnly => &mut self.read_only,
        }
    }
}
