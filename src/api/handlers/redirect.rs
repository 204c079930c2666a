//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;
use crate::web::handlers::NotFoundTemplate;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}` (public)
///
/// # Request flow
///
/// 1. Reject codes that don't have the generated shape (no DB round trip)
/// 2. Atomically increment the visit counter and fetch the destination
/// 3. Return 307 Temporary Redirect
///
/// Lookup and increment are one store operation; a redirect is counted
/// exactly once and an unknown code counts nothing.
///
/// # Errors
///
/// Unknown codes render the HTML not-found page with status 404.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    if !is_valid_code(&code) {
        debug!(%code, "malformed short code");
        return not_found_page();
    }

    match state.alias_service.resolve_and_count(&code).await {
        Ok(destination) => Redirect::temporary(&destination).into_response(),
        Err(AppError::NotFound { .. }) => not_found_page(),
        Err(e) => e.into_response(),
    }
}

fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response()
}
