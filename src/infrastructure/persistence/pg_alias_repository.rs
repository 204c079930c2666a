//! PostgreSQL implementation of the alias repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Alias, NewAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;
use crate::utils::db_error::{is_foreign_key_violation, is_unique_violation_on};

#[derive(sqlx::FromRow)]
struct AliasRow {
    code: String,
    destination_url: String,
    owner_api_key: String,
    created_at: DateTime<Utc>,
    visit_count: i64,
}

impl From<AliasRow> for Alias {
    fn from(row: AliasRow) -> Self {
        Alias::new(
            row.code,
            row.destination_url,
            row.owner_api_key,
            row.created_at,
            row.visit_count,
        )
    }
}

/// PostgreSQL repository for alias storage and resolution.
///
/// Code uniqueness rests on the `aliases` primary key; the visit counter is
/// incremented in the database, never read-modified-written by the
/// application.
pub struct PgAliasRepository {
    pool: Arc<PgPool>,
}

impl PgAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AliasRepository for PgAliasRepository {
    async fn insert(&self, new_alias: NewAlias) -> Result<Alias, AppError> {
        let row: AliasRow = sqlx::query_as(
            r#"
            INSERT INTO aliases (code, destination_url, owner_api_key)
            VALUES ($1, $2, $3)
            RETURNING code, destination_url, owner_api_key, created_at, visit_count
            "#,
        )
        .bind(&new_alias.code)
        .bind(&new_alias.destination_url)
        .bind(&new_alias.owner_api_key)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, "aliases_pkey") {
                AppError::conflict(
                    "Short code already exists",
                    json!({ "code": new_alias.code }),
                )
            } else if is_foreign_key_violation(&e) {
                AppError::unauthorized("Unknown owner API key", json!({}))
            } else {
                AppError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Alias>, AppError> {
        let row: Option<AliasRow> = sqlx::query_as(
            r#"
            SELECT code, destination_url, owner_api_key, created_at, visit_count
            FROM aliases
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Alias::from))
    }

    async fn resolve_and_count(&self, code: &str) -> Result<Option<String>, AppError> {
        // Single statement: lookup and increment commit together or not at all.
        let destination: Option<String> = sqlx::query_scalar(
            r#"
            UPDATE aliases
            SET visit_count = visit_count + 1
            WHERE code = $1
            RETURNING destination_url
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(destination)
    }

    async fn list_by_owner(&self, owner_api_key: &str) -> Result<Vec<Alias>, AppError> {
        let rows: Vec<AliasRow> = sqlx::query_as(
            r#"
            SELECT code, destination_url, owner_api_key, created_at, visit_count
            FROM aliases
            WHERE owner_api_key = $1
            ORDER BY created_at
            "#,
        )
        .bind(owner_api_key)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Alias::from).collect())
    }
}
