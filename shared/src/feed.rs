use serde::{Deserialize, Serialize};

use crate::coords::GridCoord;
use crate::village::{Village, VillageError, VillageKind};

/// One entry of the remote nearby-villages feed (`GET /village/map`).
///
/// The backend sends camelCase JSON; whatever its origin, an entry only
/// becomes part of the map through the validating [`Village`] constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyVillage {
    pub x: i32,
    pub y: i32,
    pub name: String,
    pub owner: String,
    #[serde(default)]
    pub points: Option<u32>,
}

impl NearbyVillage {
    /// Convert into a map entity, rejecting out-of-range coordinates.
    pub fn into_village(self, world_size: u32) -> Result<Village, VillageError> {
        let mut village = Village::new(
            GridCoord::new(self.x, self.y),
            VillageKind::Hostile,
            self.name,
            self.owner,
            world_size,
        )?;
        village.points = self.points;
        Ok(village)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_remote_payload() {
        let payload = r#"[
            {"x": 12, "y": 30, "name": "Village 7", "owner": "Player 7", "points": 4200},
            {"x": 61, "y": 3, "name": "Rogue", "owner": "Player 9"}
        ]"#;
        let feed: Vec<NearbyVillage> = serde_json::from_str(payload).unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].points, Some(4200));
        assert_eq!(feed[1].points, None);
    }

    #[test]
    fn conversion_validates_bounds() {
        let good = NearbyVillage {
            x: 12,
            y: 30,
            name: "Village 7".into(),
            owner: "Player 7".into(),
            points: Some(4200),
        };
        let village = good.into_village(50).unwrap();
        assert_eq!(village.kind, VillageKind::Hostile);
        assert_eq!(village.points, Some(4200));

        let bad = NearbyVillage {
            x: 61,
            y: 3,
            name: "Rogue".into(),
            owner: "Player 9".into(),
            points: None,
        };
        assert!(bad.into_village(50).is_err());
    }
}
