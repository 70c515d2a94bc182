use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::storage_errors::Result;

/// Slot name for the serialized Investment collection.
pub const INVESTMENTS_SLOT: &str = "investments";
/// Slot name for the serialized Investor collection (local-only variant).
pub const INVESTORS_SLOT: &str = "investors";

/// A named local storage slot holding one JSON-serialized collection.
///
/// Loads are fail-open: a missing file yields an empty collection, and a
/// corrupt file is logged and treated as empty rather than surfaced to the
/// caller. Saves rewrite the whole collection.
#[derive(Debug, Clone)]
pub struct JsonSlot {
    path: PathBuf,
}

impl JsonSlot {
    pub fn new(base_dir: impl AsRef<Path>, slot_name: &str) -> Self {
        let path = base_dir.as_ref().join(format!("{}.json", slot_name));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the collection stored in this slot, defaulting to empty.
    pub fn load<T: DeserializeOwned>(&self) -> Vec<T> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("Storage slot {} not found, starting empty", self.path.display());
                return Vec::new();
            }
            Err(err) => {
                error!("Failed to read storage slot {}: {}", self.path.display(), err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(err) => {
                error!("Failed to parse storage slot {}: {}", self.path.display(), err);
                Vec::new()
            }
        }
    }

    /// Serializes the full collection into this slot.
    pub fn save<T: Serialize>(&self, records: &[T]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(records)?;
        fs::write(&self.path, json)?;
        debug!("Persisted {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
