//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code and API key generation
//! - [`url_validator`] - Destination URL shape validation
//! - [`db_error`] - Database constraint-violation classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
