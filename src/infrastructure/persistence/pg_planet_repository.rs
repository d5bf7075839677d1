//! PostgreSQL implementation of planet repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPlanet, Planet, PlanetProbe};
use crate::domain::repositories::{PlanetRepository, RepositoryError};

/// PostgreSQL repository for planet storage and retrieval.
///
/// Every operation is a single statement, so a cancelled request never leaves
/// a partial write behind. Name uniqueness and non-empty fields are enforced
/// by table constraints, not by pre-checks.
pub struct PgPlanetRepository {
    pool: Arc<PgPool>,
}

impl PgPlanetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PlanetRow {
    id: i64,
    name: String,
    climate: String,
    terrain: String,
}

/// PostgreSQL `TEXT` cannot hold NUL, so a value containing one never matches
/// a stored row. Binding it would fail with `22021` instead.
fn is_unstorable(value: &str) -> bool {
    value.contains('\0')
}

impl From<PlanetRow> for Planet {
    fn from(r: PlanetRow) -> Self {
        Planet::new(r.id, r.name, r.climate, r.terrain)
    }
}

#[async_trait]
impl PlanetRepository for PgPlanetRepository {
    async fn save(&self, planet: NewPlanet) -> Result<Planet, RepositoryError> {
        let row = sqlx::query_as::<_, PlanetRow>(
            r#"
            INSERT INTO planets (name, climate, terrain)
            VALUES ($1, $2, $3)
            RETURNING id, name, climate, terrain
            "#,
        )
        .bind(planet.name)
        .bind(planet.climate)
        .bind(planet.terrain)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, RepositoryError> {
        let row = sqlx::query_as::<_, PlanetRow>(
            r#"
            SELECT id, name, climate, terrain
            FROM planets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Planet::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Planet>, RepositoryError> {
        if is_unstorable(name) {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, PlanetRow>(
            r#"
            SELECT id, name, climate, terrain
            FROM planets
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Planet::from))
    }

    async fn find_all_by_example(
        &self,
        probe: PlanetProbe,
    ) -> Result<Vec<Planet>, RepositoryError> {
        let probe_values = [&probe.name, &probe.climate, &probe.terrain];
        if probe_values.into_iter().flatten().any(|v| is_unstorable(v)) {
            return Ok(Vec::new());
        }

        // NULL parameters are wildcards; `id` never takes part in the match.
        let rows = sqlx::query_as::<_, PlanetRow>(
            r#"
            SELECT id, name, climate, terrain
            FROM planets
            WHERE ($1::TEXT IS NULL OR name = $1)
              AND ($2::TEXT IS NULL OR climate = $2)
              AND ($3::TEXT IS NULL OR terrain = $3)
            ORDER BY id
            "#,
        )
        .bind(probe.name)
        .bind(probe.climate)
        .bind(probe.terrain)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Planet::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound { id });
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
