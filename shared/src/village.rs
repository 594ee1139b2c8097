use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coords::GridCoord;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VillageError {
    #[error("coordinate ({}, {}) outside world of size {}", .coord.x, .coord.y, .world_size)]
    OutOfBounds { coord: GridCoord, world_size: u32 },
    #[error("coordinate ({}, {}) already occupied", .coord.x, .coord.y)]
    Occupied { coord: GridCoord },
    #[error("{requested} settlements requested but the world only has {capacity} cells")]
    WorldFull { requested: usize, capacity: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VillageKind {
    Player,
    Hostile,
    Abandoned,
    Bonus,
}

/// Sub-type of a bonus site, each granting a fixed production bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    RichFarm,
    Sawmill,
    IronMine,
    GoldMine,
}

impl BonusKind {
    pub const ALL: [BonusKind; 4] = [
        BonusKind::RichFarm,
        BonusKind::Sawmill,
        BonusKind::IronMine,
        BonusKind::GoldMine,
    ];

    pub const fn display_name(&self) -> &'static str {
        match self {
            BonusKind::RichFarm => "Rich Farm",
            BonusKind::Sawmill => "Sawmill",
            BonusKind::IronMine => "Iron Mine",
            BonusKind::GoldMine => "Gold Mine",
        }
    }

    pub const fn bonus_description(&self) -> &'static str {
        match self {
            BonusKind::RichFarm => "Food +50%",
            BonusKind::Sawmill => "Wood +50%",
            BonusKind::IronMine => "Iron +50%",
            BonusKind::GoldMine => "Gold +30%",
        }
    }
}

/// A settlement placed on the map: the player's own village, another
/// player's village, abandoned ruins, or a bonus site.
///
/// At most one village per coordinate; the set is only ever replaced
/// wholesale (regeneration or remote refresh), never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Village {
    pub coord: GridCoord,
    pub kind: VillageKind,
    pub name: String,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Lootable resources, abandoned villages only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<u32>,
    /// Bonus sub-type, bonus sites only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<BonusKind>,
}

impl Village {
    /// Validating constructor: every village enters the model through here,
    /// regardless of origin (generator or remote feed), so an out-of-range
    /// coordinate can never reach the spatial index.
    pub fn new(
        coord: GridCoord,
        kind: VillageKind,
        name: impl Into<String>,
        owner: impl Into<String>,
        world_size: u32,
    ) -> Result<Self, VillageError> {
        if !coord.in_bounds(world_size) {
            return Err(VillageError::OutOfBounds { coord, world_size });
        }
        Ok(Self {
            coord,
            kind,
            name: name.into(),
            owner: owner.into(),
            points: None,
            population: None,
            level: None,
            resources: None,
            bonus: None,
        })
    }

    pub fn with_stats(mut self, points: u32, population: u32, level: u32) -> Self {
        self.points = Some(points);
        self.population = Some(population);
        self.level = Some(level);
        self
    }

    pub fn with_resources(mut self, resources: u32) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn with_bonus(mut self, bonus: BonusKind) -> Self {
        self.bonus = Some(bonus);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_rejects_out_of_range_coordinates() {
        for coord in [
            GridCoord::new(-1, 5),
            GridCoord::new(5, -1),
            GridCoord::new(50, 0),
            GridCoord::new(0, 50),
        ] {
            let err = Village::new(coord, VillageKind::Hostile, "Village", "Player", 50)
                .expect_err("out-of-range coordinate must be rejected");
            assert_eq!(
                err,
                VillageError::OutOfBounds {
                    coord,
                    world_size: 50
                }
            );
        }
    }

    #[test]
    fn constructor_accepts_full_range() {
        assert!(Village::new(GridCoord::new(0, 0), VillageKind::Player, "A", "B", 50).is_ok());
        assert!(Village::new(GridCoord::new(49, 49), VillageKind::Bonus, "A", "B", 50).is_ok());
    }

    #[test]
    fn optional_stats_are_omitted_from_serialization() {
        let village =
            Village::new(GridCoord::new(3, 4), VillageKind::Abandoned, "Ruins 1", "Abandoned", 50)
                .unwrap()
                .with_resources(1200);
        let json = serde_json::to_value(&village).unwrap();
        assert_eq!(json["resources"], 1200);
        assert!(json.get("points").is_none());
        assert!(json.get("bonus").is_none());
    }

    #[test]
    fn errors_name_the_offending_cell() {
        let occupied = VillageError::Occupied {
            coord: GridCoord::new(2, 3),
        };
        assert_eq!(occupied.to_string(), "coordinate (2, 3) already occupied");
        let full = VillageError::WorldFull {
            requested: 21,
            capacity: 16,
        };
        assert_eq!(
            full.to_string(),
            "21 settlements requested but the world only has 16 cells"
        );
    }

    #[test]
    fn bonus_descriptions_match_kinds() {
        assert_eq!(BonusKind::RichFarm.bonus_description(), "Food +50%");
        assert_eq!(BonusKind::GoldMine.bonus_description(), "Gold +30%");
    }
}
