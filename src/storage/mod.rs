pub mod storage_errors;
pub mod storage_slot;

pub use storage_errors::StorageError;
pub use storage_slot::{JsonSlot, INVESTMENTS_SLOT, INVESTORS_SLOT};
