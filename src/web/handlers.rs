//! Public web form handlers.
//!
//! The form path is anonymous: aliases created here are owned by the
//! process-wide service key, and failures render inline on the page rather
//! than as JSON errors.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;

use crate::state::AppState;

/// Template for the URL submission form.
///
/// Renders `templates/index.html`; at most one of `short_url` / `error`
/// is set.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub short_url: Option<String>,
    pub error: Option<String>,
}

/// Template for the unknown-short-code page.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {}

/// Form body for the public submission endpoint.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub url: String,
}

/// Renders the URL submission form.
///
/// # Endpoint
///
/// `GET /` (public)
pub async fn index_handler() -> IndexTemplate {
    IndexTemplate {
        short_url: None,
        error: None,
    }
}

/// Creates an alias from the web form under the service key.
///
/// # Endpoint
///
/// `POST /` (public, form field `url`)
///
/// On success the page shows the absolute short URL; on failure (invalid
/// URL shape, allocation exhaustion) it shows an inline error message.
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> IndexTemplate {
    match state
        .alias_service
        .create_alias(&state.service_api_key, &form.url)
        .await
    {
        Ok(alias) => IndexTemplate {
            short_url: Some(state.alias_service.short_url(&state.base_url, &alias.code)),
            error: None,
        },
        Err(e) => IndexTemplate {
            short_url: None,
            error: Some(e.message().to_string()),
        },
    }
}
