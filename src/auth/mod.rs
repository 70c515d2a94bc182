pub mod auth_model;
pub mod auth_traits;

pub use auth_model::{Profile, UserIdentity};
pub use auth_traits::AuthProviderTrait;
