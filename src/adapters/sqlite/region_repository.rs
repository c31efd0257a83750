use super::map_foreign_key_error;
use crate::domain::model::{Region, RegionDraft};
use crate::domain::ports::RegionRepository;
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Listed in insertion order.
const SELECT_ALL: &str =
    "SELECT id, code, name, area, lat, long, population FROM regions ORDER BY rowid";

const SELECT_BY_ID: &str =
    "SELECT id, code, name, area, lat, long, population FROM regions WHERE id = ?";

const INSERT: &str =
    "INSERT INTO regions (id, code, name, area, lat, long, population) VALUES (?, ?, ?, ?, ?, ?, ?)";

const UPDATE: &str = "UPDATE regions \
     SET code = ?, name = ?, area = ?, lat = ?, long = ?, population = ? \
     WHERE id = ? \
     RETURNING id, code, name, area, lat, long, population";

const DELETE: &str =
    "DELETE FROM regions WHERE id = ? RETURNING id, code, name, area, lat, long, population";

#[derive(Debug, Clone)]
pub struct SqliteRegionRepository {
    pool: SqlitePool,
}

impl SqliteRegionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for SqliteRegionRepository {
    async fn get_all(&self) -> Result<Vec<Region>> {
        let mut conn = self.pool.acquire().await?;
        let regions = sqlx::query_as::<_, Region>(SELECT_ALL)
            .fetch_all(&mut *conn)
            .await?;

        tracing::debug!("Loaded {} regions", regions.len());
        Ok(regions)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Region>> {
        let mut conn = self.pool.acquire().await?;
        let region = sqlx::query_as::<_, Region>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(region)
    }

    async fn add(&self, draft: RegionDraft) -> Result<Region> {
        let region = draft.into_region(Uuid::new_v4());

        let mut conn = self.pool.acquire().await?;
        sqlx::query(INSERT)
            .bind(region.id)
            .bind(&region.code)
            .bind(&region.name)
            .bind(region.area)
            .bind(region.lat)
            .bind(region.long)
            .bind(region.population)
            .execute(&mut *conn)
            .await?;

        tracing::debug!("Inserted region {} ({})", region.id, region.code);
        Ok(region)
    }

    async fn update(&self, id: Uuid, draft: RegionDraft) -> Result<Option<Region>> {
        let mut conn = self.pool.acquire().await?;
        let region = sqlx::query_as::<_, Region>(UPDATE)
            .bind(&draft.code)
            .bind(&draft.name)
            .bind(draft.area)
            .bind(draft.lat)
            .bind(draft.long)
            .bind(draft.population)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        if region.is_some() {
            tracing::debug!("Updated region {}", id);
        }
        Ok(region)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>> {
        let mut conn = self.pool.acquire().await?;
        let region = sqlx::query_as::<_, Region>(DELETE)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                map_foreign_key_error(e, || ApiError::ConflictError {
                    message: format!("region {} is still referenced by walks", id),
                })
            })?;

        if region.is_some() {
            tracing::debug!("Deleted region {}", id);
        }
        Ok(region)
    }
}
