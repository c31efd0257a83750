use crate::domain::model::{
    Region, RegionDraft, Walk, WalkDifficulty, WalkDifficultyDraft, WalkDraft,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence access for regions. `Ok(None)` means the id does not exist.
#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Region>>;
    async fn get(&self, id: Uuid) -> Result<Option<Region>>;
    async fn add(&self, draft: RegionDraft) -> Result<Region>;
    async fn update(&self, id: Uuid, draft: RegionDraft) -> Result<Option<Region>>;
    async fn delete(&self, id: Uuid) -> Result<Option<Region>>;
}

/// Persistence access for walks. Reads load the related region and difficulty.
#[async_trait]
pub trait WalkRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Walk>>;
    async fn get(&self, id: Uuid) -> Result<Option<Walk>>;
    async fn add(&self, draft: WalkDraft) -> Result<Walk>;
    async fn update(&self, id: Uuid, draft: WalkDraft) -> Result<Option<Walk>>;
    async fn delete(&self, id: Uuid) -> Result<Option<Walk>>;
}

#[async_trait]
pub trait WalkDifficultyRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>>;
    async fn get(&self, id: Uuid) -> Result<Option<WalkDifficulty>>;
    async fn add(&self, draft: WalkDifficultyDraft) -> Result<WalkDifficulty>;
    async fn update(&self, id: Uuid, draft: WalkDifficultyDraft)
        -> Result<Option<WalkDifficulty>>;
    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn database_url(&self) -> &str;
    fn max_connections(&self) -> u32;
    fn log_level(&self) -> &str;
    fn json_logs(&self) -> bool;
}
