#![allow(dead_code)]

use planet_catalog::application::services::PlanetService;
use planet_catalog::infrastructure::persistence::PgPlanetRepository;
use planet_catalog::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TATOOINE: (&str, &str, &str) = ("Tatooine", "arid", "desert");
pub const ALDERAAN: (&str, &str, &str) = ("Alderaan", "temperate", "grasslands, mountains");
pub const YAVIN_IV: (&str, &str, &str) = ("Yavin IV", "temperate, tropical", "jungle, rainforest");

pub async fn create_test_planet(pool: &PgPool, planet: (&str, &str, &str)) -> i64 {
    let (name, climate, terrain) = planet;
    sqlx::query_scalar("INSERT INTO planets (name, climate, terrain) VALUES ($1, $2, $3) RETURNING id")
        .bind(name)
        .bind(climate)
        .bind(terrain)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_planets(pool: &PgPool) -> Vec<i64> {
    let mut ids = Vec::new();
    for planet in [TATOOINE, ALDERAAN, YAVIN_IV] {
        ids.push(create_test_planet(pool, planet).await);
    }
    ids
}

pub async fn count_planets(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM planets")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgPlanetRepository::new(Arc::new(pool)));
    let planet_service = Arc::new(PlanetService::new(repository));
    AppState::new(planet_service)
}
