//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without infrastructure concerns:
//!
//! - [`User`] - A registered API consumer
//! - [`Alias`] - A short-code to destination-URL mapping
//! - [`NewAlias`] - Input data for alias creation

pub mod alias;
pub mod user;

pub use alias::{Alias, NewAlias};
pub use user::User;
