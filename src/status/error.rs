//! Error types for status retrieval.

use thiserror::Error;

/// Errors returned by a [`StatusSource`](super::StatusSource) lookup.
///
/// `NotFound` is not a failure as far as health evaluation goes: the field is
/// simply absent on this server and gets the `"--"` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// The server reported no row for the requested field
    #[error("no such field: {0}")]
    NotFound(String),

    /// The query ran but failed or returned an unreadable row
    #[error("{0}")]
    Query(String),

    /// The connection could not be established or was lost
    #[error("connection failed: {0}")]
    Connection(String),

    /// Acquiring a connection timed out
    #[error("timed out after {0}s")]
    Timeout(u64),
}

impl StatusError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StatusError::NotFound(_))
    }
}
