//! Top-level router configuration combining web and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - URL submission form (public)
//! - `POST /`            - Create an alias under the service key (public)
//! - `GET  /{code}`      - Short link redirect (public)
//! - `GET  /api/`        - Liveness/info (public)
//! - `POST /api/user/new`- Register an email (public)
//! - `POST /api/new`     - Create an alias (API key)
//! - `GET  /api/user/data` - Caller's data view (API key)
//! - `GET  /api/data/{code}` - Single owned alias (API key)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - API key via header or query parameter
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use crate::web;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::public_routes().merge(
        api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
    );

    let router = Router::new()
        .merge(web::routes::public_routes())
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
