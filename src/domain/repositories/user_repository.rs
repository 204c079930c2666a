//! Repository trait for user identity data access.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the identity store.
///
/// Enforces one API key per email and email uniqueness at the store level.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user with a freshly generated API key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if the email is already registered.
    /// Returns [`AppError::Conflict`] if the API key collides with an
    /// existing one (effectively impossible for 128-bit random keys).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, email: &str, api_key: &str) -> Result<User, AppError>;

    /// Finds a user by their API key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_key(&self, api_key: &str) -> Result<Option<User>, AppError>;

    /// Checks whether an API key is registered.
    ///
    /// Indexed point lookup; never scans the table.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn key_exists(&self, api_key: &str) -> Result<bool, AppError>;
}
