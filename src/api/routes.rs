//! Planet API route configuration.

use crate::api::handlers::{
    create_planet_handler, delete_planet_handler, get_planet_by_name_handler, get_planet_handler,
    list_planets_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All planet routes.
///
/// # Endpoints
///
/// - `POST   /planet`              - Create a planet
/// - `GET    /planet/list`         - List planets (optional `climate`, `terrain` filters)
/// - `GET    /planet/name/{name}`  - Look up a planet by name
/// - `GET    /planet/{id}`         - Look up a planet by id
/// - `DELETE /planet/{id}`         - Delete a planet
///
/// Static segments (`list`, `name`) take priority over the `{id}` capture.
pub fn planet_routes() -> Router<AppState> {
    Router::new()
        .route("/planet", post(create_planet_handler))
        .route("/planet/list", get(list_planets_handler))
        .route("/planet/name/{name}", get(get_planet_by_name_handler))
        .route(
            "/planet/{id}",
            get(get_planet_handler).delete(delete_planet_handler),
        )
}
