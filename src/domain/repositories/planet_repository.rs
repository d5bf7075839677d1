//! Repository trait for planet storage.

use crate::domain::entities::{NewPlanet, Planet, PlanetProbe};
use async_trait::async_trait;

/// Failures reported by a [`PlanetRepository`].
///
/// Callers receive these verbatim; translation to HTTP happens only in
/// [`crate::error::AppError`].
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A unique, not-null or check constraint rejected the write.
    #[error("integrity violation: {message}")]
    IntegrityViolation {
        constraint: Option<String>,
        message: String,
    },

    /// The targeted row does not exist.
    #[error("planet {id} not found in store")]
    NotFound { id: i64 },

    /// Any other store failure (I/O, pool exhaustion, protocol errors).
    #[error("store failure: {0}")]
    Store(#[source] sqlx::Error),
}

/// Repository interface for managing planets.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPlanetRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_planet.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Persists a new planet and returns it with the store-assigned `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::IntegrityViolation`] if the name is taken or a
    /// field is empty.
    /// Returns [`RepositoryError::Store`] on database errors.
    async fn save(&self, planet: NewPlanet) -> Result<Planet, RepositoryError>;

    /// Finds a planet by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Store`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, RepositoryError>;

    /// Finds a planet by exact, case-sensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Store`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Planet>, RepositoryError>;

    /// Returns every planet whose set probe fields equal the planet's fields.
    ///
    /// Ordering is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Store`] on database errors.
    async fn find_all_by_example(&self, probe: PlanetProbe)
    -> Result<Vec<Planet>, RepositoryError>;

    /// Deletes a planet.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no row has this `id`.
    /// Returns [`RepositoryError::Store`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;

    /// Round-trips a trivial query to confirm the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Store`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
