use serde::{Deserialize, Serialize};
use tribemap_shared::{GridCoord, TerrainKind};

use crate::spatial::VillageId;
use crate::viewport::{Viewport, WorldRect};
use crate::worldgen::World;

/// One visible terrain cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainCell {
    pub coord: GridCoord,
    pub kind: TerrainKind,
}

/// Everything intersecting the current viewport: terrain cells and village
/// ids, plus the world rectangle they were culled against.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSet {
    pub cells: Vec<TerrainCell>,
    pub villages: Vec<VillageId>,
    pub world_rect: WorldRect,
}

/// Compute the subset of the world intersecting a `view_w` x `view_h`
/// viewport. The visible rectangle is expanded by one cell of margin to
/// avoid pop-in at the edges; slight over-inclusion there is fine, missing
/// an intersecting entity is not.
///
/// Work is proportional to the visible cell count, never to the world area:
/// terrain is evaluated lazily per visible cell and villages come from the
/// bucket index.
pub fn visible_set(viewport: &Viewport, view_w: f64, view_h: f64, world: &World) -> RenderSet {
    let world_rect = viewport
        .visible_world_rect(view_w, view_h)
        .expanded(viewport.cell_size);

    let size = world.world_size() as i32;
    let min = GridCoord::from_world_px(world_rect.min_x, world_rect.min_y, viewport.cell_size);
    let max = GridCoord::from_world_px(world_rect.max_x, world_rect.max_y, viewport.cell_size);
    let min = GridCoord::new(min.x.clamp(0, size - 1), min.y.clamp(0, size - 1));
    let max = GridCoord::new(max.x.clamp(0, size - 1), max.y.clamp(0, size - 1));

    let mut cells =
        Vec::with_capacity(((max.x - min.x + 1) * (max.y - min.y + 1)).max(0) as usize);
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let coord = GridCoord::new(x, y);
            cells.push(TerrainCell {
                coord,
                kind: world.terrain_at(coord),
            });
        }
    }

    let villages = world.index().query_rect(world.villages(), min, max);

    RenderSet {
        cells,
        villages,
        world_rect,
    }
}
