use thiserror::Error;

use crate::storage::StorageError;

/// Custom error type for investment-store operations
#[derive(Debug, Error)]
pub enum InvestmentError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for investment operations
pub type Result<T> = std::result::Result<T, InvestmentError>;
