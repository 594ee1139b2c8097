use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Building types known to the client, keyed by the backend's identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BuildingKind {
    Headquarters,
    Barracks,
    Farm,
    Warehouse,
    Wall,
    Market,
    Smithy,
    Stable,
    Workshop,
    Lumbermill,
    Claypit,
    IronMine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TroopKind {
    Spearman,
    Swordsman,
    Archer,
    Cavalry,
    Catapult,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildingInfo {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TroopInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub attack: u32,
    pub defense: u32,
}

/// Immutable game-data tables, built once at startup and passed explicitly
/// to whoever needs them.
#[derive(Debug, Clone)]
pub struct GameData {
    buildings: HashMap<BuildingKind, BuildingInfo>,
    troops: HashMap<TroopKind, TroopInfo>,
}

impl GameData {
    pub fn standard() -> Self {
        let buildings = HashMap::from([
            (
                BuildingKind::Headquarters,
                BuildingInfo { name: "Headquarters", description: "Village command centre" },
            ),
            (
                BuildingKind::Barracks,
                BuildingInfo { name: "Barracks", description: "Trains infantry" },
            ),
            (
                BuildingKind::Farm,
                BuildingInfo { name: "Farm", description: "Produces food" },
            ),
            (
                BuildingKind::Warehouse,
                BuildingInfo { name: "Warehouse", description: "Stores resources" },
            ),
            (
                BuildingKind::Wall,
                BuildingInfo { name: "Wall", description: "Village defence" },
            ),
            (
                BuildingKind::Market,
                BuildingInfo { name: "Market", description: "Trades resources" },
            ),
            (
                BuildingKind::Smithy,
                BuildingInfo { name: "Smithy", description: "Improves weapons and armour" },
            ),
            (
                BuildingKind::Stable,
                BuildingInfo { name: "Stable", description: "Trains cavalry" },
            ),
            (
                BuildingKind::Workshop,
                BuildingInfo { name: "Workshop", description: "Builds siege engines" },
            ),
            (
                BuildingKind::Lumbermill,
                BuildingInfo { name: "Lumbermill", description: "Produces wood" },
            ),
            (
                BuildingKind::Claypit,
                BuildingInfo { name: "Clay Pit", description: "Produces clay" },
            ),
            (
                BuildingKind::IronMine,
                BuildingInfo { name: "Iron Mine", description: "Produces iron" },
            ),
        ]);
        let troops = HashMap::from([
            (
                TroopKind::Spearman,
                TroopInfo { name: "Spearman", description: "Basic infantry", attack: 10, defense: 15 },
            ),
            (
                TroopKind::Swordsman,
                TroopInfo { name: "Swordsman", description: "Heavy infantry", attack: 25, defense: 20 },
            ),
            (
                TroopKind::Archer,
                TroopInfo { name: "Archer", description: "Ranged attack", attack: 20, defense: 10 },
            ),
            (
                TroopKind::Cavalry,
                TroopInfo { name: "Cavalry", description: "Fast unit", attack: 40, defense: 25 },
            ),
            (
                TroopKind::Catapult,
                TroopInfo { name: "Catapult", description: "Destroys buildings", attack: 50, defense: 5 },
            ),
        ]);
        Self { buildings, troops }
    }

    pub fn building(&self, kind: BuildingKind) -> &BuildingInfo {
        &self.buildings[&kind]
    }

    pub fn troop(&self, kind: TroopKind) -> &TroopInfo {
        &self.troops[&kind]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_building_kind_has_an_entry() {
        let data = GameData::standard();
        for kind in [
            BuildingKind::Headquarters,
            BuildingKind::Barracks,
            BuildingKind::Farm,
            BuildingKind::Warehouse,
            BuildingKind::Wall,
            BuildingKind::Market,
            BuildingKind::Smithy,
            BuildingKind::Stable,
            BuildingKind::Workshop,
            BuildingKind::Lumbermill,
            BuildingKind::Claypit,
            BuildingKind::IronMine,
        ] {
            assert!(!data.building(kind).name.is_empty());
        }
    }

    #[test]
    fn kinds_round_trip_through_backend_identifiers() {
        let kind: BuildingKind = serde_json::from_str("\"HEADQUARTERS\"").unwrap();
        assert_eq!(kind, BuildingKind::Headquarters);
        let kind: TroopKind = serde_json::from_str("\"CATAPULT\"").unwrap();
        assert_eq!(kind, TroopKind::Catapult);
        assert_eq!(serde_json::to_string(&BuildingKind::IronMine).unwrap(), "\"IRONMINE\"");
    }

    #[test]
    fn troop_stats_match_definitions() {
        let data = GameData::standard();
        assert_eq!(data.troop(TroopKind::Cavalry).attack, 40);
        assert_eq!(data.troop(TroopKind::Catapult).defense, 5);
    }
}
