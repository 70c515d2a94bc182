use thiserror::Error;

use crate::rowstore::RowStoreError;
use crate::storage::StorageError;

/// Custom error type for investor-store operations
#[derive(Debug, Error)]
pub enum InvestorError {
    /// No authenticated user; remote operations cannot be scoped.
    #[error("No authenticated user")]
    NotAuthenticated,

    /// The backend schema has not been created yet. First-time setup is
    /// required rather than a retry.
    #[error("Database setup required: {0}")]
    SetupRequired(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl InvestorError {
    pub fn is_setup_required(&self) -> bool {
        matches!(self, InvestorError::SetupRequired(_))
    }
}

impl From<RowStoreError> for InvestorError {
    fn from(err: RowStoreError) -> Self {
        match err {
            RowStoreError::MissingRelation(table) => InvestorError::SetupRequired(table),
            other => InvestorError::Backend(other.to_string()),
        }
    }
}

/// Result type for investor operations
pub type Result<T> = std::result::Result<T, InvestorError>;
