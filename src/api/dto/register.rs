//! DTOs for user registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register an email and obtain an API key.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Response carrying the freshly issued API key.
///
/// The key is returned exactly once; it cannot be recovered later.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub data: String,
    pub api_key: String,
    pub timestamp: DateTime<Utc>,
}
