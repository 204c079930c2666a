//! Alias allocation, resolution, and listing.

use std::sync::Arc;

use crate::domain::entities::{Alias, NewAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_destination;
use serde_json::json;

/// Retry budget for code allocation before giving up.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving short aliases.
///
/// Allocation never pre-checks code existence: it inserts directly and
/// treats the store's uniqueness conflict as the collision signal, so two
/// concurrent allocations can never both claim the same code.
pub struct AliasService<R: AliasRepository> {
    repository: Arc<R>,
}

impl<R: AliasRepository> AliasService<R> {
    /// Creates a new alias service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates an alias for `destination_url` owned by `owner_api_key`.
    ///
    /// The destination must already belong to a validated owner; callers are
    /// expected to have passed the authorization gate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if the URL fails shape validation.
    /// Returns [`AppError::Unauthorized`] if the owner key does not reference
    /// a registered user.
    /// Returns [`AppError::Exhausted`] if no free code is found within the
    /// retry budget.
    pub async fn create_alias(
        &self,
        owner_api_key: &str,
        destination_url: &str,
    ) -> Result<Alias, AppError> {
        let destination = validate_destination(destination_url)
            .map_err(|e| AppError::forbidden("Invalid URL.", json!({ "reason": e.to_string() })))?;

        for attempt in 1..=MAX_ATTEMPTS {
            let new_alias = NewAlias {
                code: generate_code(),
                destination_url: destination.to_string(),
                owner_api_key: owner_api_key.to_string(),
            };

            match self.repository.insert(new_alias).await {
                Ok(alias) => return Ok(alias),
                Err(AppError::Conflict { .. }) => {
                    tracing::debug!(attempt, "short code collision, redrawing");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::warn!("code allocation exhausted after {MAX_ATTEMPTS} attempts");
        Err(AppError::exhausted(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Resolves a code to its destination URL, counting the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown; no counter is
    /// touched in that case.
    pub async fn resolve_and_count(&self, code: &str) -> Result<String, AppError> {
        self.repository
            .resolve_and_count(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Retrieves an alias by code, scoped to its owner.
    ///
    /// A code owned by a different key is reported as [`AppError::NotFound`],
    /// indistinguishable from an unknown code, so tenants cannot probe each
    /// other's aliases.
    pub async fn get_owned(&self, code: &str, owner_api_key: &str) -> Result<Alias, AppError> {
        let not_found =
            || AppError::not_found("Short link not found", json!({ "code": code }));

        let alias = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(not_found)?;

        if !alias.is_owned_by(owner_api_key) {
            return Err(not_found());
        }

        Ok(alias)
    }

    /// Lists all aliases owned by the given key, oldest first.
    pub async fn list_for_owner(&self, owner_api_key: &str) -> Result<Vec<Alias>, AppError> {
        self.repository.list_by_owner(owner_api_key).await
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAliasRepository;
    use crate::utils::code_generator::is_valid_code;
    use chrono::Utc;

    const OWNER: &str = "0123456789abcdef0123456789abcdef";

    fn alias_from(new_alias: &NewAlias) -> Alias {
        Alias::new(
            new_alias.code.clone(),
            new_alias.destination_url.clone(),
            new_alias.owner_api_key.clone(),
            Utc::now(),
            0,
        )
    }

    #[tokio::test]
    async fn test_create_alias_success() {
        let mut mock_repo = MockAliasRepository::new();

        mock_repo
            .expect_insert()
            .withf(|new_alias| {
                is_valid_code(&new_alias.code)
                    && new_alias.destination_url == "https://example.com/page"
                    && new_alias.owner_api_key == OWNER
            })
            .times(1)
            .returning(|new_alias| Ok(alias_from(&new_alias)));

        let service = AliasService::new(Arc::new(mock_repo));

        let alias = service
            .create_alias(OWNER, "https://example.com/page")
            .await
            .unwrap();

        assert_eq!(alias.code.len(), 5);
        assert_eq!(alias.destination_url, "https://example.com/page");
        assert_eq!(alias.visit_count, 0);
    }

    #[tokio::test]
    async fn test_create_alias_invalid_url() {
        let mut mock_repo = MockAliasRepository::new();
        mock_repo.expect_insert().times(0);

        let service = AliasService::new(Arc::new(mock_repo));

        let result = service.create_alias(OWNER, "not-a-url").await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_create_alias_retries_on_collision() {
        let mut mock_repo = MockAliasRepository::new();

        let mut calls = 0;
        mock_repo.expect_insert().times(3).returning(move |n| {
            calls += 1;
            if calls < 3 {
                Err(AppError::conflict("Short code already exists", json!({})))
            } else {
                Ok(alias_from(&n))
            }
        });

        let service = AliasService::new(Arc::new(mock_repo));

        let result = service.create_alias(OWNER, "https://example.com").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_alias_exhausts_retry_budget() {
        let mut mock_repo = MockAliasRepository::new();

        mock_repo
            .expect_insert()
            .times(10)
            .returning(|_| Err(AppError::conflict("Short code already exists", json!({}))));

        let service = AliasService::new(Arc::new(mock_repo));

        let result = service.create_alias(OWNER, "https://example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Exhausted { .. }));
    }

    #[tokio::test]
    async fn test_create_alias_propagates_other_errors() {
        let mut mock_repo = MockAliasRepository::new();

        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::unauthorized("Unknown owner API key", json!({}))));

        let service = AliasService::new(Arc::new(mock_repo));

        let result = service.create_alias(OWNER, "https://example.com").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Unauthorized { .. }
        ));
    }

    #[tokio::test]
    async fn test_resolve_and_count_unknown_code() {
        let mut mock_repo = MockAliasRepository::new();

        mock_repo
            .expect_resolve_and_count()
            .times(1)
            .returning(|_| Ok(None));

        let service = AliasService::new(Arc::new(mock_repo));

        let result = service.resolve_and_count("zzzzz").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_and_count_returns_destination() {
        let mut mock_repo = MockAliasRepository::new();

        mock_repo
            .expect_resolve_and_count()
            .withf(|code| code == "aB3x9")
            .times(1)
            .returning(|_| Ok(Some("https://example.com/page".to_string())));

        let service = AliasService::new(Arc::new(mock_repo));

        let destination = service.resolve_and_count("aB3x9").await.unwrap();

        assert_eq!(destination, "https://example.com/page");
    }

    #[tokio::test]
    async fn test_get_owned_hides_foreign_aliases() {
        let mut mock_repo = MockAliasRepository::new();

        mock_repo.expect_find_by_code().times(1).returning(|code| {
            Ok(Some(Alias::new(
                code.to_string(),
                "https://example.com".to_string(),
                "someone-else".to_string(),
                Utc::now(),
                3,
            )))
        });

        let service = AliasService::new(Arc::new(mock_repo));

        let result = service.get_owned("aB3x9", OWNER).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_owned_returns_own_alias() {
        let mut mock_repo = MockAliasRepository::new();

        mock_repo.expect_find_by_code().times(1).returning(|code| {
            Ok(Some(Alias::new(
                code.to_string(),
                "https://example.com".to_string(),
                OWNER.to_string(),
                Utc::now(),
                3,
            )))
        });

        let service = AliasService::new(Arc::new(mock_repo));

        let alias = service.get_owned("aB3x9", OWNER).await.unwrap();

        assert_eq!(alias.visit_count, 3);
    }

    #[tokio::test]
    async fn test_short_url_formatting() {
        let service = AliasService::new(Arc::new(MockAliasRepository::new()));

        assert_eq!(
            service.short_url("https://snip.example.com/", "aB3x9"),
            "https://snip.example.com/aB3x9"
        );
        assert_eq!(
            service.short_url("https://snip.example.com", "aB3x9"),
            "https://snip.example.com/aB3x9"
        );
    }
}
