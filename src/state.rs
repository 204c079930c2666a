//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AliasService, AuthService, UserService};
use crate::infrastructure::persistence::{PgAliasRepository, PgUserRepository};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub alias_service: Arc<AliasService<PgAliasRepository>>,
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    /// Public base URL prepended to short codes in responses.
    pub base_url: String,
    /// Key owning aliases created through the public web form.
    pub service_api_key: String,
}
