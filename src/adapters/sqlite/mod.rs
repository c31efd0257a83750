pub mod region_repository;
pub mod schema;
pub mod walk_difficulty_repository;
pub mod walk_repository;

pub use region_repository::SqliteRegionRepository;
pub use walk_difficulty_repository::SqliteWalkDifficultyRepository;
pub use walk_repository::SqliteWalkRepository;

use crate::utils::error::{ApiError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Owns the connection pool. Repositories borrow a connection per operation
/// and hand it back when the operation's guard is dropped.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // 記憶體資料庫只存在於單一連線上，不能讓連線池回收它
        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        tracing::info!("🗄️ Connected to database: {}", url);

        Ok(Self { pool })
    }

    /// Fresh private database with the schema applied.
    pub async fn in_memory() -> Result<Self> {
        let database = Self::connect("sqlite::memory:", 1).await?;
        database.ensure_schema().await?;
        Ok(database)
    }

    pub async fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        for statement in schema::STATEMENTS {
            sqlx::query(*statement).execute(&mut *conn).await?;
        }
        tracing::debug!("Schema ready ({} tables)", schema::STATEMENTS.len());
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Turns a foreign-key violation into `on_violation()`, leaving other errors as
/// database failures.
pub(crate) fn map_foreign_key_error(
    err: sqlx::Error,
    on_violation: impl FnOnce() -> ApiError,
) -> ApiError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => on_violation(),
        _ => ApiError::DatabaseError(err),
    }
}
