use super::dto::{WalkDto, WalkRequest};
use super::extract::{JsonBody, PathId};
use super::AppState;
use crate::utils::error::{ApiError, Result};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_walks).post(add_walk))
        .route("/{id}", get(get_walk).put(update_walk).delete(delete_walk))
}

pub async fn get_all_walks(State(state): State<AppState>) -> Result<Json<Vec<WalkDto>>> {
    let walks = state.walks.get_all().await?;
    Ok(Json(walks.into_iter().map(WalkDto::from).collect()))
}

pub async fn get_walk(
    State(state): State<AppState>,
    PathId(id): PathId<Uuid>,
) -> Result<Json<WalkDto>> {
    let walk = state.walks.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(walk.into()))
}

pub async fn add_walk(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<WalkRequest>,
) -> Result<impl IntoResponse> {
    let walk = state.walks.add(request.into()).await?;
    let location = format!("/walks/{}", walk.id);

    tracing::info!(
        "Created walk {} in region {} ({})",
        walk.id,
        walk.region.code,
        walk.walk_difficulty.name
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(WalkDto::from(walk)),
    ))
}

pub async fn update_walk(
    State(state): State<AppState>,
    PathId(id): PathId<Uuid>,
    JsonBody(request): JsonBody<WalkRequest>,
) -> Result<Json<WalkDto>> {
    let walk = state
        .walks
        .update(id, request.into())
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(walk.into()))
}

pub async fn delete_walk(
    State(state): State<AppState>,
    PathId(id): PathId<Uuid>,
) -> Result<Json<WalkDto>> {
    let walk = state.walks.delete(id).await?.ok_or(ApiError::NotFound)?;

    tracing::info!("Deleted walk {}", id);
    Ok(Json(walk.into()))
}
