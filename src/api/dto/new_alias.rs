//! DTOs for alias creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a short alias for a URL.
///
/// The URL's shape is validated by the alias service, which reports
/// failures as `403 Forbidden` on this endpoint.
#[derive(Debug, Deserialize)]
pub struct NewAliasRequest {
    pub url: String,
}

/// Query parameters accepted by the alias creation endpoint.
///
/// `url` may be passed in the query string instead of a JSON body, the same
/// channel that may carry the `api_key` credential.
#[derive(Debug, Deserialize)]
pub struct NewAliasParams {
    pub url: Option<String>,
}

/// Response carrying the absolute short URL.
#[derive(Debug, Serialize)]
pub struct NewAliasResponse {
    pub url: String,
    pub timestamp: DateTime<Utc>,
}
