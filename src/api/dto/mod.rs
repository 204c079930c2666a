//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod alias_data;
pub mod info;
pub mod new_alias;
pub mod register;
pub mod user_data;
