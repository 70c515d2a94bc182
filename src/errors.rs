use thiserror::Error;

use crate::investments::InvestmentError;
use crate::investors::InvestorError;
use crate::rowstore::RowStoreError;
use crate::storage::StorageError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the data layer. Embedders that drive both stores can
/// funnel every module error into this one with `?`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Row store operation failed: {0}")]
    RowStore(#[from] RowStoreError),

    #[error("Investment error: {0}")]
    Investment(#[from] InvestmentError),

    #[error("Investor error: {0}")]
    Investor(#[from] InvestorError),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::Serialization(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(StorageError::Io(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn investor_flow() -> Result<()> {
        let outcome: std::result::Result<(), InvestorError> =
            Err(InvestorError::SetupRequired("investors".to_string()));
        outcome?;
        Ok(())
    }

    #[test]
    fn module_errors_funnel_into_root() {
        let err = investor_flow().unwrap_err();
        assert!(matches!(err, Error::Investor(InvestorError::SetupRequired(_))));

        let err: Error = RowStoreError::MissingRelation("investors".to_string()).into();
        assert!(matches!(err, Error::RowStore(_)));
    }
}
