//! Web form route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, submit_handler};
use axum::{Router, routing::get};

/// Public web routes.
///
/// # Endpoints
///
/// - `GET  /` - URL submission form
/// - `POST /` - Create an alias under the service key
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler).post(submit_handler))
}
