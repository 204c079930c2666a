//! HTTP server initialization and runtime setup.
//!
//! Handles the connection pool, migrations, service wiring, and the Axum
//! server lifecycle.

use crate::application::services::{AliasService, AuthService, UserService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgAliasRepository, PgUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Email under which the process-wide service key is registered.
const SERVICE_USER_EMAIL: &str = "service@internal";

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (sized per config, shared by all requests)
/// - Schema migrations
/// - The service user backing the public web form
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let alias_repository = Arc::new(PgAliasRepository::new(pool.clone()));

    // The web form creates aliases under the service key; the owner row must
    // exist before the first submission.
    user_repository
        .ensure_service_user(SERVICE_USER_EMAIL, &config.service_api_key)
        .await?;
    tracing::info!("Service user ready");

    let state = AppState {
        user_service: Arc::new(UserService::new(user_repository.clone())),
        alias_service: Arc::new(AliasService::new(alias_repository)),
        auth_service: Arc::new(AuthService::new(user_repository)),
        base_url: config.base_url.clone(),
        service_api_key: config.service_api_key.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
