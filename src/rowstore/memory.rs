use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::rowstore_errors::{Result, RowStoreError};
use super::rowstore_model::{Filter, OrderBy};
use super::rowstore_traits::RowStoreClient;

/// In-process implementation of [`RowStoreClient`].
///
/// Tables must be provisioned explicitly; an operation against an
/// unprovisioned table reports a missing relation, which mirrors a backend
/// whose schema has not been set up yet. Inserts stamp a generated `id`,
/// `created_at` and `updated_at` the way the real backend does.
#[derive(Debug, Default)]
pub struct MemoryRowStore {
    tables: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryRowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `table` if it does not exist yet.
    pub async fn provision_table(&self, table: &str) {
        let mut tables = self.tables.write().await;
        tables.entry(table.to_string()).or_default();
    }

    /// Snapshot of all rows in `table`, for inspection.
    pub async fn rows(&self, table: &str) -> Result<Vec<Value>> {
        let tables = self.tables.read().await;
        tables
            .get(table)
            .cloned()
            .ok_or_else(|| RowStoreError::MissingRelation(table.to_string()))
    }
}

fn matches_filters(row: &Value, filters: &[Filter]) -> bool {
    filters
        .iter()
        .all(|filter| row.get(&filter.column) == Some(&filter.value))
}

fn compare_columns(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl RowStoreClient for MemoryRowStore {
    async fn select(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<&OrderBy>,
        limit: Option<usize>,
    ) -> Result<Vec<Value>> {
        let tables = self.tables.read().await;
        let rows = tables
            .get(table)
            .ok_or_else(|| RowStoreError::MissingRelation(table.to_string()))?;

        let mut selected: Vec<Value> = rows
            .iter()
            .filter(|row| matches_filters(row, filters))
            .cloned()
            .collect();

        if let Some(order) = order {
            let null = Value::Null;
            selected.sort_by(|a, b| {
                let left = a.get(&order.column).unwrap_or(&null);
                let right = b.get(&order.column).unwrap_or(&null);
                let ordering = compare_columns(left, right);
                if order.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }

        if let Some(limit) = limit {
            selected.truncate(limit);
        }

        Ok(selected)
    }

    async fn insert_returning(&self, table: &str, row: Value) -> Result<Value> {
        let mut object = match row {
            Value::Object(object) => object,
            other => {
                return Err(RowStoreError::MalformedRow(format!(
                    "expected a JSON object, got {}",
                    other
                )))
            }
        };

        let now = Utc::now().to_rfc3339();
        if !object.contains_key("id") {
            object.insert("id".to_string(), Value::String(uuid::Uuid::new_v4().to_string()));
        }
        object.insert("created_at".to_string(), Value::String(now.clone()));
        object.insert("updated_at".to_string(), Value::String(now));

        let stored = Value::Object(object);
        let mut tables = self.tables.write().await;
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| RowStoreError::MissingRelation(table.to_string()))?;
        rows.push(stored.clone());
        debug!("Inserted row into {} ({} total)", table, rows.len());
        Ok(stored)
    }

    async fn update(&self, table: &str, filters: &[Filter], patch: Value) -> Result<usize> {
        let patch = match patch {
            Value::Object(object) => object,
            other => {
                return Err(RowStoreError::MalformedRow(format!(
                    "expected a JSON object, got {}",
                    other
                )))
            }
        };

        let mut tables = self.tables.write().await;
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| RowStoreError::MissingRelation(table.to_string()))?;

        let now = Utc::now().to_rfc3339();
        let mut affected = 0;
        for row in rows.iter_mut() {
            if !matches_filters(row, filters) {
                continue;
            }
            if let Value::Object(columns) = row {
                merge_patch(columns, &patch);
                columns.insert("updated_at".to_string(), Value::String(now.clone()));
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<usize> {
        let mut tables = self.tables.write().await;
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| RowStoreError::MissingRelation(table.to_string()))?;
        let before = rows.len();
        rows.retain(|row| !matches_filters(row, filters));
        Ok(before - rows.len())
    }
}

fn merge_patch(columns: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (column, value) in patch {
        columns.insert(column.clone(), value.clone());
    }
}
