use serde::{Deserialize, Serialize};

/// Terrain classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainKind {
    Plain,
    Forest,
    Water,
    Mountain,
    Desert,
}
