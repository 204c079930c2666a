//! API route configuration.
//!
//! Protected endpoints require an API key via
//! [`crate::api::middleware::auth`]; public endpoints do not.

use crate::api::handlers::{
    alias_data_handler, info_handler, new_alias_handler, register_handler, user_data_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET  /`          - Liveness/info
/// - `POST /user/new`  - Register an email, obtain an API key
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(info_handler))
        .route("/user/new", post(register_handler))
}

/// API routes protected by API-key authentication.
///
/// # Endpoints
///
/// - `POST /new`          - Create a short alias
/// - `GET  /user/data`    - The caller's registration data and aliases
/// - `GET  /data/{code}`  - A single owned alias record
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/new", post(new_alias_handler))
        .route("/user/data", get(user_data_handler))
        .route("/data/{code}", get(alias_data_handler))
}
