use std::path::Path;

use super::investments_errors::Result;
use super::investments_model::Investment;
use super::investments_traits::InvestmentRepositoryTrait;
use crate::storage::{JsonSlot, INVESTMENTS_SLOT};

/// File-backed investment repository over the investments storage slot.
pub struct FileInvestmentRepository {
    slot: JsonSlot,
}

impl FileInvestmentRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            slot: JsonSlot::new(base_dir, INVESTMENTS_SLOT),
        }
    }
}

impl InvestmentRepositoryTrait for FileInvestmentRepository {
    fn load_all(&self) -> Vec<Investment> {
        self.slot.load()
    }

    fn save_all(&self, records: &[Investment]) -> Result<()> {
        self.slot.save(records)?;
        Ok(())
    }
}
