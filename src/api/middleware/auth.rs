//! API-key authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Header carrying the API key credential.
const API_KEY_HEADER: &str = "x-api-key";

/// Query parameter carrying the API key credential.
const API_KEY_PARAM: &str = "api_key";

/// Authenticates requests using an API key.
///
/// # Credential channels
///
/// The key may be presented as the `X-API-KEY` header or the `api_key` query
/// parameter; both resolve through the same
/// [`crate::application::services::AuthService::authorize`] path. The header
/// wins when both are present.
///
/// On success the validated key is stored in request extensions as
/// [`crate::application::services::ValidatedKey`] for handlers to consume.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - No credential is presented
/// - The key is not present in the identity store
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = extract_api_key(&req).ok_or_else(|| {
        AppError::unauthorized(
            "Invalid API key.",
            json!({ "reason": "Missing X-API-KEY header or api_key query parameter" }),
        )
    })?;

    let validated = st.auth_service.authorize(&presented).await?;

    req.extensions_mut().insert(validated);

    Ok(next.run(req).await)
}

/// Pulls the API key from the header or, failing that, the query string.
fn extract_api_key(req: &Request) -> Option<String> {
    if let Some(value) = req.headers().get(API_KEY_HEADER) {
        return value.to_str().ok().map(str::to_string);
    }

    let query = req.uri().query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == API_KEY_PARAM)
        .map(|(_, value)| value.into_owned())
}
