pub mod server;

pub use crate::domain::model::{
    Region, RegionDraft, Walk, WalkDifficulty, WalkDifficultyDraft, WalkDraft,
};
pub use crate::domain::ports::{
    ConfigProvider, RegionRepository, WalkDifficultyRepository, WalkRepository,
};
pub use crate::utils::error::Result;
