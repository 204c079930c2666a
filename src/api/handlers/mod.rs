//! HTTP request handlers for API endpoints.

pub mod alias_data;
pub mod info;
pub mod new_alias;
pub mod redirect;
pub mod register;
pub mod user_data;

pub use alias_data::alias_data_handler;
pub use info::info_handler;
pub use new_alias::new_alias_handler;
pub use redirect::redirect_handler;
pub use register::register_handler;
pub use user_data::user_data_handler;
