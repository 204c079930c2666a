//! PostgreSQL repository implementations.

pub mod pg_alias_repository;
pub mod pg_user_repository;

pub use pg_alias_repository::PgAliasRepository;
pub use pg_user_repository::PgUserRepository;
