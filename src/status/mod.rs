//! Status retrieval layer.
//!
//! The health evaluator never talks to the database directly. It asks a
//! [`StatusSource`] for one named field at a time, and the source decides how
//! to fetch it (a `SHOW STATUS` query, a `SHOW GLOBAL VARIABLES` query, or a
//! fixed in-memory table in tests).

mod error;
pub mod fixed;
pub mod mysql;

pub use error::StatusError;
pub use fixed::StaticStatusSource;
pub use mysql::MySqlStatusSource;

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// Where a field lives on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Reported by `SHOW STATUS`
    Status,
    /// Reported by `SHOW GLOBAL VARIABLES`
    Variable,
}

/// The fields read on every health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusField {
    WsrepLocalState,
    WsrepLocalStateComment,
    WsrepClusterConfId,
    WsrepClusterSize,
    WsrepClusterStateUuid,
    WsrepClusterStatus,
    WsrepConnected,
    WsrepReady,
    ReadOnly,
}

impl StatusField {
    /// Every field, in the order they are collected.
    pub const ALL: [StatusField; 9] = [
        StatusField::WsrepLocalState,
        StatusField::WsrepLocalStateComment,
        StatusField::WsrepClusterConfId,
        StatusField::WsrepClusterSize,
        StatusField::WsrepClusterStateUuid,
        StatusField::WsrepClusterStatus,
        StatusField::WsrepConnected,
        StatusField::WsrepReady,
        StatusField::ReadOnly,
    ];

    /// Server-side name of the field.
    pub fn name(self) -> &'static str {
        match self {
            StatusField::WsrepLocalState => "wsrep_local_state",
            StatusField::WsrepLocalStateComment => "wsrep_local_state_comment",
            StatusField::WsrepClusterConfId => "wsrep_cluster_conf_id",
            StatusField::WsrepClusterSize => "wsrep_cluster_size",
            StatusField::WsrepClusterStateUuid => "wsrep_cluster_state_uuid",
            StatusField::WsrepClusterStatus => "wsrep_cluster_status",
            StatusField::WsrepConnected => "wsrep_connected",
            StatusField::WsrepReady => "wsrep_ready",
            StatusField::ReadOnly => "read_only",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            StatusField::ReadOnly => FieldKind::Variable,
            _ => FieldKind::Status,
        }
    }
}

impl fmt::Display for StatusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key lookup interface over a database node's status and variables.
///
/// Implementations must report an absent field as [`StatusError::NotFound`]
/// so callers can tell it apart from a failed lookup. Timeouts and
/// reconnection are the implementation's concern.
#[async_trait]
pub trait StatusSource: Send + Sync + 'static {
    /// Fetch the current value of `field`.
    async fn get_value(&self, field: StatusField) -> Result<String, StatusError>;
}
