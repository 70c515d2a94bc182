pub mod auth;
pub mod errors;
pub mod investments;
pub mod investors;
pub mod rowstore;
pub mod storage;

pub use errors::{Error, Result};
pub use investments::*;
pub use investors::*;
