use super::map_foreign_key_error;
use crate::domain::model::{WalkDifficulty, WalkDifficultyDraft};
use crate::domain::ports::WalkDifficultyRepository;
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SqliteWalkDifficultyRepository {
    pool: SqlitePool,
}

impl SqliteWalkDifficultyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalkDifficultyRepository for SqliteWalkDifficultyRepository {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>> {
        let mut conn = self.pool.acquire().await?;
        let difficulties = sqlx::query_as::<_, WalkDifficulty>(
            "SELECT id, name FROM walk_difficulties ORDER BY rowid",
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(difficulties)
    }

    async fn get(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        let mut conn = self.pool.acquire().await?;
        let difficulty = sqlx::query_as::<_, WalkDifficulty>(
            "SELECT id, name FROM walk_difficulties WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(difficulty)
    }

    async fn add(&self, draft: WalkDifficultyDraft) -> Result<WalkDifficulty> {
        let difficulty = WalkDifficulty {
            id: Uuid::new_v4(),
            name: draft.name,
        };

        let mut conn = self.pool.acquire().await?;
        sqlx::query("INSERT INTO walk_difficulties (id, name) VALUES (?, ?)")
            .bind(difficulty.id)
            .bind(&difficulty.name)
            .execute(&mut *conn)
            .await?;

        tracing::debug!("Inserted walk difficulty {} ({})", difficulty.id, difficulty.name);
        Ok(difficulty)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: WalkDifficultyDraft,
    ) -> Result<Option<WalkDifficulty>> {
        let mut conn = self.pool.acquire().await?;
        let difficulty = sqlx::query_as::<_, WalkDifficulty>(
            "UPDATE walk_difficulties SET name = ? WHERE id = ? RETURNING id, name",
        )
        .bind(&draft.name)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(difficulty)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>> {
        let mut conn = self.pool.acquire().await?;
        let difficulty = sqlx::query_as::<_, WalkDifficulty>(
            "DELETE FROM walk_difficulties WHERE id = ? RETURNING id, name",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            map_foreign_key_error(e, || ApiError::ConflictError {
                message: format!("walk difficulty {} is still referenced by walks", id),
            })
        })?;

        if difficulty.is_some() {
            tracing::debug!("Deleted walk difficulty {}", id);
        }
        Ok(difficulty)
    }
}
