//! JSON transfer objects and their conversions to and from the domain models.
//!
//! Add and update requests share one shape per entity. Any `id` sent by a
//! client is ignored because none of the request types declare it.

use crate::domain::model::{
    Region, RegionDraft, Walk, WalkDifficulty, WalkDifficultyDraft, WalkDraft,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRequest {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl From<Region> for RegionDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
            area: region.area,
            lat: region.lat,
            long: region.long,
            population: region.population,
        }
    }
}

impl From<RegionRequest> for RegionDraft {
    fn from(request: RegionRequest) -> Self {
        Self {
            code: request.code,
            name: request.name,
            area: request.area,
            lat: request.lat,
            long: request.long,
            population: request.population,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDto {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkRequest {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

impl From<Walk> for WalkDto {
    fn from(walk: Walk) -> Self {
        Self {
            id: walk.id,
            name: walk.name,
            length: walk.length,
            region_id: walk.region_id,
            walk_difficulty_id: walk.walk_difficulty_id,
        }
    }
}

impl From<WalkRequest> for WalkDraft {
    fn from(request: WalkRequest) -> Self {
        Self {
            name: request.name,
            length: request.length,
            region_id: request.region_id,
            walk_difficulty_id: request.walk_difficulty_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDifficultyDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDifficultyRequest {
    pub name: String,
}

impl From<WalkDifficulty> for WalkDifficultyDto {
    fn from(difficulty: WalkDifficulty) -> Self {
        Self {
            id: difficulty.id,
            name: difficulty.name,
        }
    }
}

impl From<WalkDifficultyRequest> for WalkDifficultyDraft {
    fn from(request: WalkDifficultyRequest) -> Self {
        Self { name: request.name }
    }
}
