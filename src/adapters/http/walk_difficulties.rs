use super::dto::{WalkDifficultyDto, WalkDifficultyRequest};
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
        .route("/", get(get_all_walk_difficulties).post(add_walk_difficulty))
        .route(
            "/{id}",
            get(get_walk_difficulty)
                .put(update_walk_difficulty)
                .delete(delete_walk_difficulty),
        )
}

pub async fn get_all_walk_difficulties(
    State(state): State<AppState>,
) -> Result<Json<Vec<WalkDifficultyDto>>> {
    let difficulties = state.walk_difficulties.get_all().await?;
    Ok(Json(
        difficulties
            .into_iter()
            .map(WalkDifficultyDto::from)
            .collect(),
    ))
}

pub async fn get_walk_difficulty(
    State(state): State<AppState>,
    PathId(id): PathId<Uuid>,
) -> Result<Json<WalkDifficultyDto>> {
    let difficulty = state
        .walk_difficulties
        .get(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(difficulty.into()))
}

pub async fn add_walk_difficulty(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<WalkDifficultyRequest>,
) -> Result<impl IntoResponse> {
    let difficulty = state.walk_difficulties.add(request.into()).await?;
    let location = format!("/walkdifficulties/{}", difficulty.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(WalkDifficultyDto::from(difficulty)),
    ))
}

pub async fn update_walk_difficulty(
    State(state): State<AppState>,
    PathId(id): PathId<Uuid>,
    JsonBody(request): JsonBody<WalkDifficultyRequest>,
) -> Result<Json<WalkDifficultyDto>> {
    let difficulty = state
        .walk_difficulties
        .update(id, request.into())
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(difficulty.into()))
}

pub async fn delete_walk_difficulty(
    State(state): State<AppState>,
    PathId(id): PathId<Uuid>,
) -> Result<Json<WalkDifficultyDto>> {
    let difficulty = state
        .walk_difficulties
        .delete(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(difficulty.into()))
}
