//! Handlers for the planet catalog endpoints.
//!
//! Handlers never build status codes for failures themselves: every error
//! path goes through `?` into [`AppError`].

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::planet::{CreatePlanetRequest, ListPlanetsParams, PlanetItem};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a planet.
///
/// # Endpoint
///
/// `POST /planet`
///
/// # Request Body
///
/// ```json
/// { "name": "Tatooine", "climate": "arid", "terrain": "desert" }
/// ```
///
/// # Errors
///
/// Returns 422 if the body is malformed or any field is missing or empty.
/// Returns 409 if a planet with the same name already exists.
pub async fn create_planet_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlanetItem>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let planet = state.planet_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(planet.into())))
}

/// Retrieves a planet by id.
///
/// # Endpoint
///
/// `GET /planet/{id}`
///
/// # Errors
///
/// Returns 404 if no planet has this id.
pub async fn get_planet_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PlanetItem>, AppError> {
    let planet = state
        .planet_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Planet not found", json!({ "id": id })))?;

    Ok(Json(planet.into()))
}

/// Retrieves a planet by exact name.
///
/// # Endpoint
///
/// `GET /planet/name/{name}`
///
/// # Errors
///
/// Returns 404 if no planet has this name.
pub async fn get_planet_by_name_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PlanetItem>, AppError> {
    let planet = state
        .planet_service
        .get_by_name(&name)
        .await?
        .ok_or_else(|| AppError::not_found("Planet not found", json!({ "name": name })))?;

    Ok(Json(planet.into()))
}

/// Lists planets, optionally filtered.
///
/// # Endpoint
///
/// `GET /planet/list`
///
/// # Query Parameters
///
/// - `climate` (optional): exact climate match
/// - `terrain` (optional): exact terrain match
///
/// Filters combine with AND. An empty value counts as absent. Always returns
/// a JSON array, possibly empty.
pub async fn list_planets_handler(
    State(state): State<AppState>,
    params: Result<Query<ListPlanetsParams>, QueryRejection>,
) -> Result<Json<Vec<PlanetItem>>, AppError> {
    let Query(params) = params?;

    let planets = state
        .planet_service
        .list(params.climate, params.terrain)
        .await?;

    Ok(Json(planets.into_iter().map(PlanetItem::from).collect()))
}

/// Deletes a planet.
///
/// # Endpoint
///
/// `DELETE /planet/{id}`
///
/// # Errors
///
/// Returns 404 if no planet has this id.
pub async fn delete_planet_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.planet_service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
