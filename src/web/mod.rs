//! Web layer: public HTML form for anonymous alias creation.

pub mod handlers;
pub mod routes;
