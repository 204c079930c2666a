//! User entity representing a registered API consumer.

use chrono::{DateTime, Utc};

/// A registered user identified by email, holding one API key.
///
/// Users are created exactly once per unique email and never mutated.
/// The API key is the sole credential accepted for operations scoped to
/// this user and the foreign key referenced by owned aliases.
#[derive(Debug, Clone)]
pub struct User {
    pub email: String,
    pub api_key: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(email: String, api_key: String, created_at: DateTime<Utc>) -> Self {
        Self {
            email,
            api_key,
            created_at,
        }
    }
}
