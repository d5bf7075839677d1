//! PostgreSQL repository implementations.
//!
//! - [`PgPlanetRepository`] - Planet storage, lookup and query-by-example
//! - [`db_error`] - Mapping of `sqlx` errors onto [`crate::domain::repositories::RepositoryError`]

pub mod db_error;
pub mod pg_planet_repository;

pub use pg_planet_repository::PgPlanetRepository;
