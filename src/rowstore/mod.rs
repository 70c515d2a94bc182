pub mod memory;
pub mod rowstore_errors;
pub mod rowstore_model;
pub mod rowstore_traits;

pub use memory::MemoryRowStore;
pub use rowstore_errors::RowStoreError;
pub use rowstore_model::{Filter, OrderBy, INVESTORS_TABLE, PROFILES_TABLE};
pub use rowstore_traits::RowStoreClient;
