//! Alias entity representing a short-code to destination-URL mapping.

use chrono::{DateTime, Utc};

/// A short alias with its destination, owner, and visit counter.
///
/// `visit_count` starts at 0 and is incremented exclusively by the
/// redirection path, exactly once per resolved redirect.
#[derive(Debug, Clone)]
pub struct Alias {
    pub code: String,
    pub destination_url: String,
    pub owner_api_key: String,
    pub created_at: DateTime<Utc>,
    pub visit_count: i64,
}

impl Alias {
    /// Creates a new Alias instance.
    pub fn new(
        code: String,
        destination_url: String,
        owner_api_key: String,
        created_at: DateTime<Utc>,
        visit_count: i64,
    ) -> Self {
        Self {
            code,
            destination_url,
            owner_api_key,
            created_at,
            visit_count,
        }
    }

    /// Returns true if the alias belongs to the given API key.
    pub fn is_owned_by(&self, api_key: &str) -> bool {
        self.owner_api_key == api_key
    }
}

/// Input data for creating a new alias.
#[derive(Debug, Clone)]
pub struct NewAlias {
    pub code: String,
    pub destination_url: String,
    pub owner_api_key: String,
}
