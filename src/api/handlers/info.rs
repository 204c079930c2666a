//! Handler for the API liveness/info endpoint.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::api::dto::info::InfoResponse;
use crate::state::AppState;

/// Returns service identity and liveness information.
///
/// # Endpoint
///
/// `GET /api/` (public)
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database check failed
pub async fn info_handler(State(state): State<AppState>) -> (StatusCode, Json<InfoResponse>) {
    // Indexed point lookup as a connectivity probe; the boolean result is
    // irrelevant, only that the store answered.
    let database_ok = state
        .user_service
        .key_exists(&state.service_api_key)
        .await
        .is_ok();

    let response = InfoResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: if database_ok { "ok" } else { "degraded" },
        timestamp: Utc::now(),
    };

    let status_code = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
