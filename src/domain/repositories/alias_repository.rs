//! Repository trait for alias data access.

use crate::domain::entities::{Alias, NewAlias};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the alias store.
///
/// Short-code uniqueness is enforced by the store itself (primary key), not
/// by callers pre-checking existence: the unique-violation error returned
/// from [`AliasRepository::insert`] is the allocator's sole collision signal.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAliasRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Persists a new alias with a visit count of 0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Unauthorized`] if the owner API key does not
    /// reference a registered user.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_alias: NewAlias) -> Result<Alias, AppError>;

    /// Finds an alias by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Alias>, AppError>;

    /// Resolves a code to its destination URL, incrementing the visit
    /// counter exactly once.
    ///
    /// Lookup and increment are a single atomic statement; concurrent
    /// resolutions of the same code each produce exactly one increment.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the code is unknown (no increment is applied anywhere).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn resolve_and_count(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Lists all aliases owned by the given API key, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(&self, owner_api_key: &str) -> Result<Vec<Alias>, AppError>;
}
