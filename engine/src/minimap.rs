use serde::{Deserialize, Serialize};
use tribemap_shared::{GridCoord, VillageKind};

use crate::viewport::Viewport;
use crate::worldgen::World;

/// Fixed-size overview of the whole world: a linear down-scaling of
/// world-pixel space into minimap pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimap {
    scale_x: f64,
    scale_y: f64,
    cell_size: f64,
}

/// One projected settlement dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimapPoint {
    pub x: f64,
    pub y: f64,
    pub kind: VillageKind,
}

/// The main viewport's visible rectangle in minimap pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimapRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Minimap {
    pub fn new(world_size: u32, cell_size: f64, minimap_w: f64, minimap_h: f64) -> Self {
        let world_px = world_size as f64 * cell_size;
        Self {
            scale_x: minimap_w / world_px,
            scale_y: minimap_h / world_px,
            cell_size,
        }
    }

    /// Minimap position of a cell's centre.
    pub fn project(&self, coord: GridCoord) -> (f64, f64) {
        let (wx, wy) = coord.center_px(self.cell_size);
        (wx * self.scale_x, wy * self.scale_y)
    }

    /// Every settlement as a minimap dot; the host draws the player kind
    /// larger, as the legend promises.
    pub fn points(&self, world: &World) -> Vec<MinimapPoint> {
        world
            .villages()
            .iter()
            .map(|v| {
                let (x, y) = self.project(v.coord);
                MinimapPoint { x, y, kind: v.kind }
            })
            .collect()
    }

    /// Overlay rectangle showing where the main viewport currently looks.
    pub fn viewport_rect(&self, viewport: &Viewport, view_w: f64, view_h: f64) -> MinimapRect {
        let rect = viewport.visible_world_rect(view_w, view_h);
        MinimapRect {
            x: rect.min_x * self.scale_x,
            y: rect.min_y * self.scale_y,
            w: (rect.max_x - rect.min_x) * self.scale_x,
            h: (rect.max_y - rect.min_y) * self.scale_y,
        }
    }

    /// World-pixel point corresponding to a click on the minimap, for
    /// recentring the main viewport.
    pub fn center_for_click(&self, mx: f64, my: f64) -> (f64, f64) {
        (mx / self.scale_x, my / self.scale_y)
    }
}
