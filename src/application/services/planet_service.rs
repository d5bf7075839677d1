//! Planet catalog service.

use crate::domain::entities::{NewPlanet, Planet, PlanetProbe};
use crate::domain::repositories::{PlanetRepository, RepositoryError};
use std::sync::Arc;
use tracing::{debug, info};

/// Use-case façade over a [`PlanetRepository`].
///
/// One method per use case, each a single repository call. Repository
/// failures are returned unchanged; there is no recovery here.
pub struct PlanetService {
    repository: Arc<dyn PlanetRepository>,
}

impl PlanetService {
    /// Creates a new planet service.
    pub fn new(repository: Arc<dyn PlanetRepository>) -> Self {
        Self { repository }
    }

    /// Creates a planet. Name uniqueness is left to the store.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::IntegrityViolation`] if the name already exists.
    /// Returns [`RepositoryError::Store`] on database errors.
    pub async fn create(&self, planet: NewPlanet) -> Result<Planet, RepositoryError> {
        let created = self.repository.save(planet).await?;
        info!(id = created.id, name = %created.name, "planet created");
        Ok(created)
    }

    /// Looks up a planet by id. Absence is `Ok(None)`, not an error.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Planet>, RepositoryError> {
        debug!(id, "get planet by id");
        self.repository.find_by_id(id).await
    }

    /// Looks up a planet by exact name. Absence is `Ok(None)`, not an error.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Planet>, RepositoryError> {
        debug!(name, "get planet by name");
        self.repository.find_by_name(name).await
    }

    /// Lists planets matching both optional filters; `None` or an empty
    /// string is a wildcard.
    pub async fn list(
        &self,
        climate: Option<String>,
        terrain: Option<String>,
    ) -> Result<Vec<Planet>, RepositoryError> {
        let probe = PlanetProbe::default()
            .with_climate(climate.filter(|c| !c.is_empty()))
            .with_terrain(terrain.filter(|t| !t.is_empty()));

        debug!(?probe, "list planets");
        self.repository.find_all_by_example(probe).await
    }

    /// Removes a planet.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no planet has this id.
    /// Returns [`RepositoryError::Store`] on database errors.
    pub async fn remove(&self, id: i64) -> Result<(), RepositoryError> {
        self.repository.delete_by_id(id).await?;
        info!(id, "planet removed");
        Ok(())
    }

    /// Checks that the underlying store is reachable.
    pub async fn health_check(&self) -> Result<(), RepositoryError> {
        self.repository.ping().await
    }
}
