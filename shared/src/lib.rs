pub mod construction;
pub mod coords;
pub mod feed;
pub mod game_data;
pub mod terrain;
pub mod village;

pub use construction::Construction;
pub use coords::GridCoord;
pub use feed::NearbyVillage;
pub use game_data::{BuildingKind, GameData, TroopKind};
pub use terrain::TerrainKind;
pub use village::{BonusKind, Village, VillageError, VillageKind};
