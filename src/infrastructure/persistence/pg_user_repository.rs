//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

#[derive(sqlx::FromRow)]
struct UserRow {
    email: String,
    api_key: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.email, row.api_key, row.created_at)
    }
}

/// PostgreSQL repository for user identity storage.
///
/// All lookups are indexed point queries against the `users` primary key or
/// the unique `api_key` index.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Ensures the process-wide service user exists.
    ///
    /// Called once at startup so that aliases created through the public web
    /// form satisfy the owner foreign key. Idempotent across restarts.
    pub async fn ensure_service_user(&self, email: &str, api_key: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO users (email, api_key)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(email)
        .bind(api_key)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, email: &str, api_key: &str) -> Result<User, AppError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (email, api_key)
            VALUES ($1, $2)
            RETURNING email, api_key, created_at
            "#,
        )
        .bind(email)
        .bind(api_key)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, "users_pkey") {
                AppError::forbidden(
                    "Email already registered with service.",
                    json!({ "email": email }),
                )
            } else if is_unique_violation_on(&e, "users_api_key_key") {
                AppError::conflict("API key already exists", json!({}))
            } else {
                AppError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_key(&self, api_key: &str) -> Result<Option<User>, AppError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT email, api_key, created_at
            FROM users
            WHERE api_key = $1
            "#,
        )
        .bind(api_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn key_exists(&self, api_key: &str) -> Result<bool, AppError> {
        let found: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT 1
            FROM users
            WHERE api_key = $1
            "#,
        )
        .bind(api_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(found.is_some())
    }
}
