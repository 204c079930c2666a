//! Handler for user registration.

use axum::{Json, extract::State};
use chrono::Utc;
use validator::Validate;

use crate::api::dto::register::{RegisterRequest, RegisterResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers an email and returns a fresh API key.
///
/// # Endpoint
///
/// `POST /api/user/new` (public)
///
/// # Response
///
/// ```json
/// {
///   "data": "alice@example.com registered successfully.",
///   "api_key": "0123456789abcdef0123456789abcdef",
///   "timestamp": "2026-08-28T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed email.
/// Returns 403 Forbidden if the email is already registered.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    payload.validate()?;

    let user = state.user_service.register(&payload.email).await?;

    tracing::info!(email = %user.email, "user registered");

    Ok(Json(RegisterResponse {
        data: format!("{} registered successfully.", user.email),
        api_key: user.api_key,
        timestamp: Utc::now(),
    }))
}
