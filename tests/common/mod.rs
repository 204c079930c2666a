#![allow(dead_code)]

use axum::{Router, middleware, routing::get};
use snipurl::api::handlers::redirect_handler;
use snipurl::api::middleware::auth;
use snipurl::application::services::{AliasService, AuthService, UserService};
use snipurl::infrastructure::persistence::{PgAliasRepository, PgUserRepository};
use snipurl::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const SERVICE_KEY: &str = "ffffffffffffffffffffffffffffffff";
pub const BASE_URL: &str = "http://sn.test";

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let alias_repository = Arc::new(PgAliasRepository::new(pool.clone()));

    AppState {
        user_service: Arc::new(UserService::new(user_repository.clone())),
        alias_service: Arc::new(AliasService::new(alias_repository)),
        auth_service: Arc::new(AuthService::new(user_repository)),
        base_url: BASE_URL.to_string(),
        service_api_key: SERVICE_KEY.to_string(),
    }
}

/// Full application router without the trailing-slash layer.
pub fn test_app(state: AppState) -> Router {
    let api_router = snipurl::api::routes::public_routes().merge(
        snipurl::api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
    );

    Router::new()
        .merge(snipurl::web::routes::public_routes())
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_router)
        .with_state(state)
}

pub async fn create_test_user(pool: &PgPool, email: &str, api_key: &str) {
    sqlx::query("INSERT INTO users (email, api_key) VALUES ($1, $2)")
        .bind(email)
        .bind(api_key)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_alias(pool: &PgPool, code: &str, url: &str, owner_api_key: &str) {
    sqlx::query("INSERT INTO aliases (code, destination_url, owner_api_key) VALUES ($1, $2, $3)")
        .bind(code)
        .bind(url)
        .bind(owner_api_key)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn visit_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT visit_count FROM aliases WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn alias_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM aliases")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn user_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}
