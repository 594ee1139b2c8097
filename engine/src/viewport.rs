use serde::{Deserialize, Serialize};
use tribemap_shared::GridCoord;

/// Viewport manages the pan/zoom transformation from world coordinates to
/// screen coordinates. World space is grid coordinates scaled by `cell_size`;
/// screen space applies `scale` then the pan offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
    pub cell_size: f64,
}

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.1;
pub const DEFAULT_CELL_SIZE: f64 = 80.0;

/// Inverse transforms clamp the divisor to this, even though mutation
/// already keeps `scale` within bounds.
const SCALE_EPSILON: f64 = 1e-6;

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl Viewport {
    /// Convert world-pixel coordinates to screen coordinates.
    pub fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
        (
            wx * self.scale + self.offset_x,
            wy * self.scale + self.offset_y,
        )
    }

    /// Convert screen coordinates to world-pixel coordinates.
    pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        let scale = self.scale.max(SCALE_EPSILON);
        ((sx - self.offset_x) / scale, (sy - self.offset_y) / scale)
    }

    /// Screen position of a cell's top-left corner.
    pub fn grid_to_screen(&self, coord: GridCoord) -> (f64, f64) {
        let (wx, wy) = coord.world_px(self.cell_size);
        self.world_to_screen(wx, wy)
    }

    /// Grid cell under a screen point.
    pub fn screen_to_grid(&self, sx: f64, sy: f64) -> GridCoord {
        let (wx, wy) = self.screen_to_world(sx, sy);
        GridCoord::from_world_px(wx, wy, self.cell_size)
    }

    /// One wheel notch of zoom: fixed step, clamped, no recentring.
    pub fn zoom_step(&mut self, delta_y: f64) {
        if delta_y == 0.0 {
            return;
        }
        let step = ZOOM_STEP * -delta_y.signum();
        self.scale = (self.scale + step).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Zoom toward a focus point (screen coordinates): the world point under
    /// the cursor stays fixed.
    pub fn zoom_at(&mut self, delta_y: f64, screen_x: f64, screen_y: f64) {
        let old_scale = self.scale.max(SCALE_EPSILON);
        self.zoom_step(delta_y);
        let ratio = self.scale / old_scale;

        self.offset_x = screen_x - (screen_x - self.offset_x) * ratio;
        self.offset_y = screen_y - (screen_y - self.offset_y) * ratio;
    }

    /// Pan by screen-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Recompute the offset so the centre of `coord`'s cell lands at the
    /// geometric centre of a `view_w` x `view_h` viewport. Zoom is untouched.
    pub fn center_on(&mut self, coord: GridCoord, view_w: f64, view_h: f64) {
        let (cx, cy) = coord.center_px(self.cell_size);
        self.offset_x = view_w / 2.0 - cx * self.scale;
        self.offset_y = view_h / 2.0 - cy * self.scale;
    }

    /// World-pixel rectangle currently visible in a `view_w` x `view_h`
    /// viewport.
    pub fn visible_world_rect(&self, view_w: f64, view_h: f64) -> WorldRect {
        let (min_x, min_y) = self.screen_to_world(0.0, 0.0);
        let (max_x, max_y) = self.screen_to_world(view_w, view_h);
        WorldRect {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

/// Axis-aligned rectangle in world-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldRect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl WorldRect {
    /// Grow the rectangle by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    pub fn contains(&self, wx: f64, wy: f64) -> bool {
        wx >= self.min_x && wx <= self.max_x && wy >= self.min_y && wy <= self.max_y
    }
}
