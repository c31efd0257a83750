use sqlx::FromRow;
use uuid::Uuid;

/// A row of the `regions` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Region {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Region fields supplied by a caller. Ids are always assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDraft {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl RegionDraft {
    pub fn into_region(self, id: Uuid) -> Region {
        Region {
            id,
            code: self.code,
            name: self.name,
            area: self.area,
            lat: self.lat,
            long: self.long,
            population: self.population,
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct WalkDifficulty {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalkDifficultyDraft {
    pub name: String,
}

/// A walk together with the region and difficulty it references.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
    pub region: Region,
    pub walk_difficulty: WalkDifficulty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalkDraft {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}
