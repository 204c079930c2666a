//! User registration and lookup.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_api_key;
use serde_json::json;

/// Service for registering users and resolving keys back to users.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers an email and issues a fresh API key.
    ///
    /// The key is a 128-bit random hex token generated per registration and
    /// returned exactly once; it is never re-derivable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if the email is already registered.
    pub async fn register(&self, email: &str) -> Result<User, AppError> {
        let api_key = generate_api_key();
        self.repository.create(email, &api_key).await
    }

    /// Checks whether an API key is registered.
    ///
    /// Indexed point lookup; also serves as the liveness probe's
    /// connectivity check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn key_exists(&self, api_key: &str) -> Result<bool, AppError> {
        self.repository.key_exists(api_key).await
    }

    /// Resolves a validated API key to its user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the key is unknown. Callers that
    /// passed the authorization gate will not normally hit this.
    pub async fn get_by_key(&self, api_key: &str) -> Result<User, AppError> {
        self.repository
            .find_by_key(api_key)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized("Invalid API key.", json!({ "reason": "Key is not registered" }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_register_generates_hex_key() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .withf(|email, api_key| {
                email == "alice@example.com"
                    && api_key.len() == 32
                    && api_key.chars().all(|c| c.is_ascii_hexdigit())
            })
            .times(1)
            .returning(|email, api_key| {
                Ok(User::new(email.to_string(), api_key.to_string(), Utc::now()))
            });

        let service = UserService::new(Arc::new(mock_repo));

        let user = service.register("alice@example.com").await.unwrap();

        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.api_key.len(), 32);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_create().times(1).returning(|email, _| {
            Err(AppError::forbidden(
                "Email already registered with service.",
                serde_json::json!({ "email": email }),
            ))
        });

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.register("alice@example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_key_exists_reports_store_answer() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_key_exists()
            .times(1)
            .returning(|_| Ok(false));

        let service = UserService::new(Arc::new(mock_repo));

        // Ok(false) means the store answered; only an Err signals trouble.
        assert!(!service.key_exists("unknown").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_by_key_unknown() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_key()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_by_key("missing").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Unauthorized { .. }
        ));
    }
}
