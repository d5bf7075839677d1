mod common;

use planet_catalog::domain::entities::{NewPlanet, PlanetProbe};
use planet_catalog::domain::repositories::{PlanetRepository, RepositoryError};
use planet_catalog::infrastructure::persistence::PgPlanetRepository;
use planet_catalog::infrastructure::persistence::db_error::PLANET_NAME_UNIQUE_CONSTRAINT;
use sqlx::PgPool;
use std::sync::Arc;

fn repo(pool: PgPool) -> PgPlanetRepository {
    PgPlanetRepository::new(Arc::new(pool))
}

// ─── SAVE ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_save_assigns_id(pool: PgPool) {
    let repo = repo(pool.clone());

    let planet = repo
        .save(NewPlanet::new("Tatooine", "arid", "desert"))
        .await
        .unwrap();

    assert!(planet.id > 0);
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.climate, "arid");
    assert_eq!(planet.terrain, "desert");
    assert_eq!(common::count_planets(&pool).await, 1);
}

#[sqlx::test]
async fn test_save_then_find_by_id_returns_equal_record(pool: PgPool) {
    let repo = repo(pool);

    let created = repo
        .save(NewPlanet::new("Alderaan", "temperate", "grasslands, mountains"))
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(found, Some(created));
}

#[sqlx::test]
async fn test_save_duplicate_name_is_integrity_violation(pool: PgPool) {
    let repo = repo(pool.clone());

    repo.save(NewPlanet::new("Tatooine", "arid", "desert"))
        .await
        .unwrap();

    let result = repo
        .save(NewPlanet::new("Tatooine", "temperate", "jungle"))
        .await;

    match result {
        Err(RepositoryError::IntegrityViolation { constraint, .. }) => {
            assert_eq!(constraint.as_deref(), Some(PLANET_NAME_UNIQUE_CONSTRAINT));
        }
        other => panic!("expected integrity violation, got {:?}", other),
    }
    assert_eq!(common::count_planets(&pool).await, 1);
}

#[sqlx::test]
async fn test_save_name_uniqueness_is_case_sensitive(pool: PgPool) {
    let repo = repo(pool);

    repo.save(NewPlanet::new("Tatooine", "arid", "desert"))
        .await
        .unwrap();

    assert!(
        repo.save(NewPlanet::new("tatooine", "arid", "desert"))
            .await
            .is_ok()
    );
}

#[sqlx::test]
async fn test_save_empty_fields_is_integrity_violation(pool: PgPool) {
    let repo = repo(pool.clone());

    let result = repo.save(NewPlanet::new("", "", "")).await;

    assert!(matches!(
        result,
        Err(RepositoryError::IntegrityViolation { .. })
    ));
    assert_eq!(common::count_planets(&pool).await, 0);
}

// ─── FIND ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_find_by_unknown_id_is_empty(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.find_by_id(1).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_name(pool: PgPool) {
    let id = common::create_test_planet(&pool, common::TATOOINE).await;
    let repo = repo(pool);

    let planet = repo.find_by_name("Tatooine").await.unwrap().unwrap();
    assert_eq!(planet.id, id);

    assert!(repo.find_by_name("tatooine").await.unwrap().is_none());
    assert!(repo.find_by_name("name'").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_name_with_nul_character_is_empty(pool: PgPool) {
    common::seed_planets(&pool).await;
    let repo = repo(pool);

    assert!(repo.find_by_name("Tatoo\0ine").await.unwrap().is_none());
}

// ─── FIND ALL BY EXAMPLE ─────────────────────────────────────────────────────

#[sqlx::test]
async fn test_find_all_by_example_wildcard_returns_everything(pool: PgPool) {
    common::seed_planets(&pool).await;
    let repo = repo(pool);

    let planets = repo
        .find_all_by_example(PlanetProbe::default())
        .await
        .unwrap();

    assert_eq!(planets.len(), 3);
}

#[sqlx::test]
async fn test_find_all_by_example_on_empty_store(pool: PgPool) {
    let repo = repo(pool);

    let planets = repo
        .find_all_by_example(PlanetProbe::default())
        .await
        .unwrap();

    assert!(planets.is_empty());
}

#[sqlx::test]
async fn test_find_all_by_example_is_conjunctive(pool: PgPool) {
    common::seed_planets(&pool).await;
    let repo = repo(pool);

    let both = PlanetProbe::default()
        .with_climate(Some("arid".to_string()))
        .with_terrain(Some("desert".to_string()));
    let planets = repo.find_all_by_example(both).await.unwrap();
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].name, "Tatooine");

    let mismatched = PlanetProbe::default()
        .with_climate(Some("arid".to_string()))
        .with_terrain(Some("grasslands, mountains".to_string()));
    assert!(repo.find_all_by_example(mismatched).await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_find_all_by_example_single_field(pool: PgPool) {
    common::seed_planets(&pool).await;
    let repo = repo(pool);

    let temperate = PlanetProbe::default().with_climate(Some("temperate".to_string()));
    let planets = repo.find_all_by_example(temperate).await.unwrap();

    // Exact match only: "temperate, tropical" is not included.
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].name, "Alderaan");

    let jungle = PlanetProbe::default().with_terrain(Some("jungle, rainforest".to_string()));
    let planets = repo.find_all_by_example(jungle).await.unwrap();
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].name, "Yavin IV");
}

#[sqlx::test]
async fn test_find_all_by_example_by_name(pool: PgPool) {
    common::seed_planets(&pool).await;
    let repo = repo(pool);

    let probe = PlanetProbe::default().with_name(Some("Yavin IV".to_string()));
    let planets = repo.find_all_by_example(probe).await.unwrap();

    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].terrain, "jungle, rainforest");
}

#[sqlx::test]
async fn test_find_all_by_example_with_nul_character_is_empty(pool: PgPool) {
    common::seed_planets(&pool).await;
    let repo = repo(pool);

    let probe = PlanetProbe::default().with_terrain(Some("des\0ert".to_string()));

    assert!(repo.find_all_by_example(probe).await.unwrap().is_empty());
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_existing_planet(pool: PgPool) {
    let id = common::create_test_planet(&pool, common::TATOOINE).await;
    let repo = repo(pool.clone());

    repo.delete_by_id(id).await.unwrap();

    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert_eq!(common::count_planets(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_twice_is_not_found(pool: PgPool) {
    let id = common::create_test_planet(&pool, common::TATOOINE).await;
    let repo = repo(pool);

    repo.delete_by_id(id).await.unwrap();

    let result = repo.delete_by_id(id).await;
    assert!(matches!(result, Err(RepositoryError::NotFound { id: missing }) if missing == id));
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.ping().await.is_ok());
}
