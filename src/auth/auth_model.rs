use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user as exposed by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// Mirror of the backend `profiles` row. Referenced only for setup and
/// diagnostic purposes; the stores never read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
