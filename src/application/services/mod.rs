//! Application services orchestrating domain operations.

pub mod alias_service;
pub mod auth_service;
pub mod user_service;

pub use alias_service::AliasService;
pub use auth_service::{AuthService, ValidatedKey};
pub use user_service::UserService;
