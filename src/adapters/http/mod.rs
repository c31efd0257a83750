pub mod dto;
pub mod extract;
pub mod regions;
pub mod walk_difficulties;
pub mod walks;

use crate::adapters::sqlite::{
    Database, SqliteRegionRepository, SqliteWalkDifficultyRepository, SqliteWalkRepository,
};
use crate::domain::ports::{RegionRepository, WalkDifficultyRepository, WalkRepository};
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;

/// Shared handler state: one repository handle per entity.
#[derive(Clone)]
pub struct AppState {
    pub regions: Arc<dyn RegionRepository>,
    pub walks: Arc<dyn WalkRepository>,
    pub walk_difficulties: Arc<dyn WalkDifficultyRepository>,
}

impl AppState {
    pub fn new(
        regions: Arc<dyn RegionRepository>,
        walks: Arc<dyn WalkRepository>,
        walk_difficulties: Arc<dyn WalkDifficultyRepository>,
    ) -> Self {
        Self {
            regions,
            walks,
            walk_difficulties,
        }
    }

    pub fn from_database(database: &Database) -> Self {
        let pool = database.pool().clone();
        Self::new(
            Arc::new(SqliteRegionRepository::new(pool.clone())),
            Arc::new(SqliteWalkRepository::new(pool.clone())),
            Arc::new(SqliteWalkDifficultyRepository::new(pool)),
        )
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/regions", regions::routes())
        .nest("/walks", walks::routes())
        .nest("/walkdifficulties", walk_difficulties::routes())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "{} {} -> {} ({:?})",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}
