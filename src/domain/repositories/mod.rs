//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in [`crate::infrastructure::persistence`]. Mock implementations are
//! auto-generated via `mockall` for unit tests.

pub mod alias_repository;
pub mod user_repository;

pub use alias_repository::AliasRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use alias_repository::MockAliasRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
