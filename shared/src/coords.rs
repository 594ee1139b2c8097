use serde::{Deserialize, Serialize};

/// Integer cell address within the bounded world grid.
///
/// Signed so that out-of-range input from collaborators is representable
/// and can be rejected at the validation boundary instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies within `[0, world_size)` on both axes.
    pub const fn in_bounds(&self, world_size: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < world_size && (self.y as u32) < world_size
    }

    /// Top-left corner of the cell in world-pixel space.
    pub fn world_px(&self, cell_size: f64) -> (f64, f64) {
        (self.x as f64 * cell_size, self.y as f64 * cell_size)
    }

    /// Centre of the cell in world-pixel space.
    pub fn center_px(&self, cell_size: f64) -> (f64, f64) {
        (
            (self.x as f64 + 0.5) * cell_size,
            (self.y as f64 + 0.5) * cell_size,
        )
    }

    /// Cell containing a world-pixel point.
    pub fn from_world_px(wx: f64, wy: f64, cell_size: f64) -> Self {
        Self {
            x: (wx / cell_size).floor() as i32,
            y: (wy / cell_size).floor() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GridCoord;

    #[test]
    fn in_bounds_accepts_interior_and_rejects_edges() {
        assert!(GridCoord::new(0, 0).in_bounds(50));
        assert!(GridCoord::new(49, 49).in_bounds(50));
        assert!(!GridCoord::new(50, 0).in_bounds(50));
        assert!(!GridCoord::new(0, 50).in_bounds(50));
        assert!(!GridCoord::new(-1, 10).in_bounds(50));
    }

    #[test]
    fn world_px_round_trips_through_cell_centre() {
        let coord = GridCoord::new(25, 13);
        let (cx, cy) = coord.center_px(80.0);
        assert_eq!(GridCoord::from_world_px(cx, cy, 80.0), coord);
    }

    #[test]
    fn from_world_px_floors_negative_points() {
        assert_eq!(
            GridCoord::from_world_px(-1.0, -0.5, 80.0),
            GridCoord::new(-1, -1)
        );
    }
}
