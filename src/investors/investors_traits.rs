use async_trait::async_trait;

use super::investors_errors::Result;
use super::investors_model::{Investor, InvestorUpdate, NewInvestor};

/// Trait for the persistence side of the investor store.
///
/// The store owns the in-memory collection and all derived aggregation; an
/// adapter implements where records authoritatively live. The local adapter
/// materializes records itself and persists whole-collection snapshots; the
/// remote adapter writes through to the backend row-store and treats the
/// snapshot as a no-op.
#[async_trait]
pub trait InvestorPersistence: Send + Sync {
    /// Loads the full collection for the current scope.
    async fn load_all(&self) -> Result<Vec<Investor>>;

    /// Creates one record and returns its canonical form (ids and timestamps
    /// assigned).
    async fn create(&self, data: NewInvestor) -> Result<Investor>;

    /// Applies the present fields of `patch` to the record identified by
    /// `id`, wherever records authoritatively live. Must succeed before the
    /// store mutates its own collection.
    async fn apply_update(&self, id: &str, patch: &InvestorUpdate) -> Result<()>;

    /// Removes the record identified by `id` from authoritative storage.
    async fn remove(&self, id: &str) -> Result<()>;

    /// Persists a full-collection snapshot after a successful mutation.
    async fn persist_snapshot(&self, records: &[Investor]) -> Result<()>;
}
