//! Handler for the per-user data view.

use axum::{Extension, Json, extract::State};

use crate::api::dto::alias_data::AliasRecord;
use crate::api::dto::user_data::UserDataResponse;
use crate::application::services::ValidatedKey;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the authenticated user's registration data and all their aliases.
///
/// # Endpoint
///
/// `GET /api/user/data` (API key required)
///
/// # Response
///
/// ```json
/// {
///   "email": "alice@example.com",
///   "created": "2026-08-01T09:30:00Z",
///   "urls": [
///     { "url": "https://example.com/page", "code": "aB3x9",
///       "timestamp": "2026-08-02T10:00:00Z", "visits": 1 }
///   ]
/// }
/// ```
pub async fn user_data_handler(
    State(state): State<AppState>,
    Extension(key): Extension<ValidatedKey>,
) -> Result<Json<UserDataResponse>, AppError> {
    let user = state.user_service.get_by_key(&key.0).await?;
    let aliases = state.alias_service.list_for_owner(&key.0).await?;

    Ok(Json(UserDataResponse {
        email: user.email,
        created: user.created_at,
        urls: aliases.into_iter().map(AliasRecord::from).collect(),
    }))
}
