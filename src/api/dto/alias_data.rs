//! DTO for a single alias record.

use crate::domain::entities::Alias;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An alias as exposed through the API: destination, code, creation time,
/// and visit count.
#[derive(Debug, Serialize)]
pub struct AliasRecord {
    pub url: String,
    pub code: String,
    pub timestamp: DateTime<Utc>,
    pub visits: i64,
}

impl From<Alias> for AliasRecord {
    fn from(alias: Alias) -> Self {
        Self {
            url: alias.destination_url,
            code: alias.code,
            timestamp: alias.created_at,
            visits: alias.visit_count,
        }
    }
}
