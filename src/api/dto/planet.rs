//! DTOs for the planet endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::{Validate, ValidationError};

use crate::domain::entities::{NewPlanet, Planet};

/// Request body for `POST /planet`.
///
/// All three fields are required, must be non-empty and must not contain NUL
/// characters, which PostgreSQL `TEXT` cannot store. Unknown fields,
/// including a client-supplied `id`, are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlanetRequest {
    #[validate(
        length(min = 1, message = "name must not be empty"),
        custom(function = "validate_storable_text")
    )]
    pub name: String,

    #[validate(
        length(min = 1, message = "climate must not be empty"),
        custom(function = "validate_storable_text")
    )]
    pub climate: String,

    #[validate(
        length(min = 1, message = "terrain must not be empty"),
        custom(function = "validate_storable_text")
    )]
    pub terrain: String,
}

fn validate_storable_text(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_character")
            .with_message("must not contain NUL characters".into()));
    }
    Ok(())
}

impl From<CreatePlanetRequest> for NewPlanet {
    fn from(req: CreatePlanetRequest) -> Self {
        NewPlanet::new(req.name, req.climate, req.terrain)
    }
}

/// Planet as it appears on the wire.
///
/// Serializes exactly as `{"id", "name", "climate", "terrain"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetItem {
    pub id: Option<i64>,
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

impl From<Planet> for PlanetItem {
    fn from(p: Planet) -> Self {
        Self {
            id: Some(p.id),
            name: p.name,
            climate: p.climate,
            terrain: p.terrain,
        }
    }
}

/// Query parameters for `GET /planet/list`.
///
/// Both filters are independent. A missing or empty parameter is a wildcard.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListPlanetsParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub climate: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub terrain: Option<String>,
}
