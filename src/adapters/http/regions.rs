use super::dto::{RegionDto, RegionRequest};
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
        .route("/", get(get_all_regions).post(add_region))
        .route(
            "/{id}",
            get(get_region).put(update_region).delete(delete_region),
        )
}

pub async fn get_all_regions(State(state): State<AppState>) -> Result<Json<Vec<RegionDto>>> {
    let regions = state.regions.get_all().await?;
    Ok(Json(regions.into_iter().map(RegionDto::from).collect()))
}

pub async fn get_region(
    State(state): State<AppState>,
    PathId(id): PathId<Uuid>,
) -> Result<Json<RegionDto>> {
    let region = state.regions.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(region.into()))
}

pub async fn add_region(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegionRequest>,
) -> Result<impl IntoResponse> {
    let region = state.regions.add(request.into()).await?;
    let location = format!("/regions/{}", region.id);

    tracing::info!("Created region {} ({})", region.id, region.code);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(RegionDto::from(region)),
    ))
}

pub async fn update_region(
    State(state): State<AppState>,
    PathId(id): PathId<Uuid>,
    JsonBody(request): JsonBody<RegionRequest>,
) -> Result<Json<RegionDto>> {
    let region = state
        .regions
        .update(id, request.into())
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(region.into()))
}

pub async fn delete_region(
    State(state): State<AppState>,
    PathId(id): PathId<Uuid>,
) -> Result<Json<RegionDto>> {
    let region = state.regions.delete(id).await?.ok_or(ApiError::NotFound)?;

    tracing::info!("Deleted region {}", id);
    Ok(Json(region.into()))
}
