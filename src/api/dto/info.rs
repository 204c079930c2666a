//! DTO for the API liveness/info endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Service identity and liveness information.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}
