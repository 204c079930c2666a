//! DTO for the per-user data view.

use crate::api::dto::alias_data::AliasRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user's registration data joined with all of their aliases.
#[derive(Debug, Serialize)]
pub struct UserDataResponse {
    pub email: String,
    pub created: DateTime<Utc>,
    pub urls: Vec<AliasRecord>,
}
