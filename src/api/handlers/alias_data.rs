//! Handler for a single alias record.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::alias_data::AliasRecord;
use crate::application::services::ValidatedKey;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the alias record for a code owned by the authenticated key.
///
/// # Endpoint
///
/// `GET /api/data/{code}` (API key required)
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or owned by a different
/// key; the two cases are deliberately indistinguishable.
pub async fn alias_data_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Extension(key): Extension<ValidatedKey>,
) -> Result<Json<AliasRecord>, AppError> {
    let alias = state.alias_service.get_owned(&code, &key.0).await?;

    Ok(Json(alias.into()))
}
