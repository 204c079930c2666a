//! Access control service for API key validation.

use std::sync::Arc;

use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;

/// An API key that has passed validation against the identity store.
///
/// Handlers receive this through request extensions; its presence proves the
/// request passed the authorization gate.
#[derive(Debug, Clone)]
pub struct ValidatedKey(pub String);

/// Service validating presented API keys against the identity store.
///
/// There is a single validation path regardless of how the credential was
/// presented (header or query parameter); every privileged operation goes
/// through [`AuthService::authorize`] before touching the store.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new access control service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates a presented API key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the key is not present in the
    /// identity store.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authorize(&self, presented_key: &str) -> Result<ValidatedKey, AppError> {
        let is_known = self.repository.key_exists(presented_key).await?;

        if !is_known {
            return Err(AppError::unauthorized(
                "Invalid API key.",
                json!({ "reason": "Key is not registered" }),
            ));
        }

        Ok(ValidatedKey(presented_key.to_string()))
    }
}
