use super::investments_errors::Result;
use super::investments_model::Investment;

/// Trait for investment persistence operations
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Loads the persisted collection. Fail-open: an unreadable or corrupt
    /// slot yields an empty collection, never an error.
    fn load_all(&self) -> Vec<Investment>;

    /// Persists the full collection.
    fn save_all(&self, records: &[Investment]) -> Result<()>;
}
