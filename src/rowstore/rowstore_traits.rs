use async_trait::async_trait;
use serde_json::Value;

use super::rowstore_errors::Result;
use super::rowstore_model::{Filter, OrderBy};

/// Trait for the opaque backend row-store.
///
/// Rows are plain JSON objects in the backend's column naming. Every filter is
/// a column equality; callers scope investor rows with an explicit
/// user-identity filter.
#[async_trait]
pub trait RowStoreClient: Send + Sync {
    /// Returns the rows of `table` matching all `filters`, optionally ordered
    /// and truncated.
    async fn select(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<&OrderBy>,
        limit: Option<usize>,
    ) -> Result<Vec<Value>>;

    /// Inserts a single row and returns the canonical stored row, including
    /// backend-generated columns (primary key, timestamps).
    async fn insert_returning(&self, table: &str, row: Value) -> Result<Value>;

    /// Merges `patch` into every row matching `filters`. Returns the number of
    /// rows affected.
    async fn update(&self, table: &str, filters: &[Filter], patch: Value) -> Result<usize>;

    /// Deletes every row matching `filters`. Returns the number of rows
    /// removed.
    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<usize>;
}
