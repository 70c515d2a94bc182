use serde_json::Value;

/// Table holding investor rows, one per record, keyed by a generated id and
/// owned by a user identity.
pub const INVESTORS_TABLE: &str = "investors";
/// Table holding user profiles. Setup/diagnostic use only.
pub const PROFILES_TABLE: &str = "profiles";

/// A column-equality filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Filter {
    pub fn eq(column: &str, value: impl Into<Value>) -> Self {
        Self {
            column: column.to_string(),
            value: value.into(),
        }
    }
}

/// Ordering applied to a select.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub column: String,
    pub ascending: bool,
}

impl OrderBy {
    pub fn asc(column: &str) -> Self {
        Self {
            column: column.to_string(),
            ascending: true,
        }
    }

    pub fn desc(column: &str) -> Self {
        Self {
            column: column.to_string(),
            ascending: false,
        }
    }
}
