//! In-memory status source.

use super::{StatusError, StatusField, StatusSource};
use async_trait::async_trait;
use std::collections::HashMap;

/// A status source backed by a fixed table.
///
/// Fields with no entry report [`StatusError::NotFound`]. Useful for tests and
/// for exercising the HTTP layer without a database.
#[derive(Debug, Clone, Default)]
pub struct StaticStatusSource {
    values: HashMap<StatusField, Result<String, StatusError>>,
}

impl StaticStatusSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    pub fn with_value(mut self, field: StatusField, value: impl Into<String>) -> Self {
        self.values.insert(field, Ok(value.into()));
        self
    }

    /// Make lookups of `field` fail with `error`.
    pub fn with_error(mut self, field: StatusField, error: StatusError) -> Self {
        self.values.insert(field, Err(error));
        self
    }
}

#[async_trait]
impl StatusSource for StaticStatusSource {
    async fn get_value(&self, field: StatusField) -> Result<String, StatusError> {
        self.values
            .get(&field)
            .cloned()
            .unwrap_or_else(|| Err(StatusError::NotFound(field.name().to_string())))
    }
}
