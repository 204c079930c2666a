//! Handler for alias creation.

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::new_alias::{NewAliasParams, NewAliasRequest, NewAliasResponse};
use crate::application::services::ValidatedKey;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short alias owned by the authenticated key.
///
/// # Endpoint
///
/// `POST /api/new` (API key required)
///
/// # Request
///
/// `url` is taken from the query string when present, otherwise from the
/// JSON body `{ "url": "..." }`. A body-less
/// `POST /api/new?api_key=K&url=https://...` is a complete request.
///
/// # Response
///
/// ```json
/// {
///   "url": "https://snip.example.com/aB3x9",
///   "timestamp": "2026-08-28T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if no `url` is supplied in either channel.
/// Returns 401 Unauthorized for a missing or unknown key.
/// Returns 403 Forbidden if the URL fails shape validation.
/// Returns 503 Service Unavailable if code allocation is exhausted.
pub async fn new_alias_handler(
    State(state): State<AppState>,
    Extension(key): Extension<ValidatedKey>,
    Query(params): Query<NewAliasParams>,
    payload: Option<Json<NewAliasRequest>>,
) -> Result<Json<NewAliasResponse>, AppError> {
    let url = params
        .url
        .or_else(|| payload.map(|Json(body)| body.url))
        .ok_or_else(|| {
            AppError::bad_request(
                "Missing url",
                json!({ "reason": "Provide url as a query parameter or JSON body" }),
            )
        })?;

    let alias = state.alias_service.create_alias(&key.0, &url).await?;

    tracing::info!(code = %alias.code, "alias created");

    let short_url = state.alias_service.short_url(&state.base_url, &alias.code);

    Ok(Json(NewAliasResponse {
        url: short_url,
        timestamp: alias.created_at,
    }))
}
