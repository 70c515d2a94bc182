use thiserror::Error;

/// Custom error type for backend row-store operations
#[derive(Debug, Error)]
pub enum RowStoreError {
    /// The target table has not been created yet. Surfaced distinctly so the
    /// caller can prompt for first-time schema setup instead of reporting a
    /// generic failure.
    #[error("relation \"{0}\" does not exist")]
    MissingRelation(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Malformed row: {0}")]
    MalformedRow(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RowStoreError {
    pub fn is_missing_relation(&self) -> bool {
        matches!(self, RowStoreError::MissingRelation(_))
    }
}

/// Result type for row-store operations
pub type Result<T> = std::result::Result<T, RowStoreError>;
