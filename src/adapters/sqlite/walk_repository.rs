use super::map_foreign_key_error;
use crate::domain::model::{Region, Walk, WalkDifficulty, WalkDraft};
use crate::domain::ports::WalkRepository;
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use uuid::Uuid;

const SELECT_JOINED: &str = "SELECT w.id, w.name, w.length, w.region_id, w.walk_difficulty_id, \
            r.code AS region_code, r.name AS region_name, r.area AS region_area, \
            r.lat AS region_lat, r.long AS region_long, r.population AS region_population, \
            d.name AS walk_difficulty_name \
     FROM walks w \
     INNER JOIN regions r ON r.id = w.region_id \
     INNER JOIN walk_difficulties d ON d.id = w.walk_difficulty_id";

const INSERT: &str =
    "INSERT INTO walks (id, name, length, region_id, walk_difficulty_id) VALUES (?, ?, ?, ?, ?)";

const UPDATE: &str =
    "UPDATE walks SET name = ?, length = ?, region_id = ?, walk_difficulty_id = ? WHERE id = ?";

/// Flat result of the walk/region/difficulty join.
#[derive(Debug, FromRow)]
struct WalkRow {
    id: Uuid,
    name: String,
    length: f64,
    region_id: Uuid,
    walk_difficulty_id: Uuid,
    region_code: String,
    region_name: String,
    region_area: f64,
    region_lat: f64,
    region_long: f64,
    region_population: i64,
    walk_difficulty_name: String,
}

impl From<WalkRow> for Walk {
    fn from(row: WalkRow) -> Self {
        Walk {
            id: row.id,
            name: row.name,
            length: row.length,
            region_id: row.region_id,
            walk_difficulty_id: row.walk_difficulty_id,
            region: Region {
                id: row.region_id,
                code: row.region_code,
                name: row.region_name,
                area: row.region_area,
                lat: row.region_lat,
                long: row.region_long,
                population: row.region_population,
            },
            walk_difficulty: WalkDifficulty {
                id: row.walk_difficulty_id,
                name: row.walk_difficulty_name,
            },
        }
    }
}

async fn fetch_walk(conn: &mut SqliteConnection, id: Uuid) -> Result<Option<Walk>> {
    let sql = format!("{} WHERE w.id = ?", SELECT_JOINED);
    let row = sqlx::query_as::<_, WalkRow>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.map(Walk::from))
}

fn invalid_reference(err: sqlx::Error, draft: &WalkDraft) -> ApiError {
    map_foreign_key_error(err, || ApiError::InvalidReferenceError {
        message: format!(
            "region {} or walk difficulty {} does not exist",
            draft.region_id, draft.walk_difficulty_id
        ),
    })
}

#[derive(Debug, Clone)]
pub struct SqliteWalkRepository {
    pool: SqlitePool,
}

impl SqliteWalkRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalkRepository for SqliteWalkRepository {
    async fn get_all(&self) -> Result<Vec<Walk>> {
        let sql = format!("{} ORDER BY w.rowid", SELECT_JOINED);
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, WalkRow>(&sql)
            .fetch_all(&mut *conn)
            .await?;

        tracing::debug!("Loaded {} walks", rows.len());
        Ok(rows.into_iter().map(Walk::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Walk>> {
        let mut conn = self.pool.acquire().await?;
        fetch_walk(&mut *conn, id).await
    }

    async fn add(&self, draft: WalkDraft) -> Result<Walk> {
        let id = Uuid::new_v4();

        let mut tx = self.pool.begin().await?;
        sqlx::query(INSERT)
            .bind(id)
            .bind(&draft.name)
            .bind(draft.length)
            .bind(draft.region_id)
            .bind(draft.walk_difficulty_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| invalid_reference(e, &draft))?;

        // 讀回時一併載入 region 與 difficulty
        let walk = fetch_walk(&mut *tx, id)
            .await?
            .ok_or(ApiError::DatabaseError(sqlx::Error::RowNotFound))?;
        tx.commit().await?;

        tracing::debug!("Inserted walk {} in region {}", walk.id, walk.region_id);
        Ok(walk)
    }

    async fn update(&self, id: Uuid, draft: WalkDraft) -> Result<Option<Walk>> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(UPDATE)
            .bind(&draft.name)
            .bind(draft.length)
            .bind(draft.region_id)
            .bind(draft.walk_difficulty_id)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| invalid_reference(e, &draft))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        // 外鍵可能已變更，重新載入關聯資料
        let walk = fetch_walk(&mut *tx, id).await?;
        tx.commit().await?;

        tracing::debug!("Updated walk {}", id);
        Ok(walk)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>> {
        let mut tx = self.pool.begin().await?;
        let Some(walk) = fetch_walk(&mut *tx, id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM walks WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::debug!("Deleted walk {}", id);
        Ok(Some(walk))
    }
}
