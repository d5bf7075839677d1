//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for testing.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_planet.rs` for usage examples.

pub mod planet_repository;

pub use planet_repository::{PlanetRepository, RepositoryError};

#[cfg(test)]
pub use planet_repository::MockPlanetRepository;
