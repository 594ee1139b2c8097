use serde::{Deserialize, Serialize};
use tribemap_shared::{GridCoord, NearbyVillage, Village, VillageError};

use crate::input::{DragTracker, InputEvent};
use crate::minimap::{Minimap, MinimapPoint, MinimapRect};
use crate::render_set::{visible_set, RenderSet};
use crate::selection::SelectionState;
use crate::spatial::VillageId;
use crate::viewport::{Viewport, WorldRect};
use crate::worldgen::{generate, GenConfig, World};

/// Notifications produced for the host in response to input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapEvent {
    /// A village was clicked; carries the full entity so attack/conquer/
    /// claim flows owned elsewhere need no second lookup.
    VillageClicked(Village),
    SelectionChanged { selected: Option<VillageId> },
    HoverChanged { hovered: Option<VillageId> },
    ViewportChanged { world_rect: WorldRect, zoom: f64 },
}

/// The interactive map: world, viewport and interaction state behind a
/// single synchronous event entry point. One writer, no locking; the
/// village/terrain set is read-only between regenerations.
#[derive(Debug, Clone)]
pub struct MapEngine {
    world: World,
    viewport: Viewport,
    drag: DragTracker,
    selection: SelectionState,
    view_w: f64,
    view_h: f64,
}

impl MapEngine {
    /// Generate a world and open the viewport centred on the player's
    /// village at zoom 1.
    pub fn new(
        config: &GenConfig,
        player_coord: GridCoord,
        view_w: f64,
        view_h: f64,
    ) -> Result<Self, VillageError> {
        let world = generate(config, player_coord)?;
        let mut viewport = Viewport::default();
        viewport.center_on(player_coord, view_w, view_h);
        Ok(Self {
            world,
            viewport,
            drag: DragTracker::default(),
            selection: SelectionState::default(),
            view_w,
            view_h,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Currently selected village, if any.
    pub fn selected_village(&self) -> Option<&Village> {
        self.selection.selected().map(|id| self.world.village(id))
    }

    pub fn hovered_village(&self) -> Option<&Village> {
        self.selection.hovered().map(|id| self.world.village(id))
    }

    /// Host resized the viewport.
    pub fn set_view_size(&mut self, view_w: f64, view_h: f64) {
        self.view_w = view_w;
        self.view_h = view_h;
    }

    /// Re-centre on the player's village. Zoom is untouched.
    pub fn center_on_player(&mut self) -> MapEvent {
        let coord = self.world.player().coord;
        self.viewport.center_on(coord, self.view_w, self.view_h);
        self.viewport_changed()
    }

    /// Merge a remote nearby-village feed; see [`World::merge_remote`].
    /// Clears selection and hover, whose ids may otherwise go stale on a
    /// future refresh.
    pub fn merge_remote(&mut self, feed: Vec<NearbyVillage>) -> usize {
        self.selection.set_selected(None);
        self.selection.set_hovered(None, None);
        self.world.merge_remote(feed)
    }

    /// Terrain and villages intersecting the current viewport.
    pub fn visible_set(&self) -> RenderSet {
        visible_set(&self.viewport, self.view_w, self.view_h, &self.world)
    }

    /// Project the full village set plus the current viewport rectangle
    /// into a `minimap_w` x `minimap_h` overview.
    pub fn minimap(&self, minimap_w: f64, minimap_h: f64) -> (Vec<MinimapPoint>, MinimapRect) {
        let minimap = Minimap::new(
            self.world.world_size(),
            self.viewport.cell_size,
            minimap_w,
            minimap_h,
        );
        (
            minimap.points(&self.world),
            minimap.viewport_rect(&self.viewport, self.view_w, self.view_h),
        )
    }

    /// Re-centre the main viewport from a click on the minimap.
    pub fn click_minimap(&mut self, mx: f64, my: f64, minimap_w: f64, minimap_h: f64) -> MapEvent {
        let minimap = Minimap::new(
            self.world.world_size(),
            self.viewport.cell_size,
            minimap_w,
            minimap_h,
        );
        let (wx, wy) = minimap.center_for_click(mx, my);
        self.viewport.offset_x = self.view_w / 2.0 - wx * self.viewport.scale;
        self.viewport.offset_y = self.view_h / 2.0 - wy * self.viewport.scale;
        self.viewport_changed()
    }

    /// Drive the engine with one input event. All state transitions happen
    /// here, synchronously; malformed sequences fall through as no-ops.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<MapEvent> {
        let mut out = Vec::new();
        match event {
            InputEvent::PointerDown { x, y, .. } => {
                self.drag
                    .pointer_down(x, y, self.viewport.offset_x, self.viewport.offset_y);
                // A drag gesture ends any tooltip.
                if self.selection.set_hovered(None, None) {
                    out.push(MapEvent::HoverChanged { hovered: None });
                }
            }
            InputEvent::PointerMove { x, y, .. } => {
                if let Some((ox, oy)) = self.drag.pointer_move(x, y) {
                    self.viewport.offset_x = ox;
                    self.viewport.offset_y = oy;
                    out.push(self.viewport_changed());
                } else {
                    let hit = self.world.village_at(self.viewport.screen_to_grid(x, y));
                    if self.selection.set_hovered(hit, Some((x, y))) {
                        out.push(MapEvent::HoverChanged { hovered: hit });
                    }
                }
            }
            InputEvent::PointerUp { x, y, .. } => {
                if self.drag.pointer_up(x, y) {
                    let hit = self.world.village_at(self.viewport.screen_to_grid(x, y));
                    if self.selection.set_selected(hit) {
                        out.push(MapEvent::SelectionChanged { selected: hit });
                    }
                    if let Some(id) = hit {
                        out.push(MapEvent::VillageClicked(self.world.village(id).clone()));
                    }
                }
            }
            InputEvent::PointerLeave { .. } => {
                self.drag.pointer_leave();
                if self.selection.set_hovered(None, None) {
                    out.push(MapEvent::HoverChanged { hovered: None });
                }
            }
            InputEvent::Wheel { delta_y, x, y, .. } => {
                self.viewport.zoom_at(delta_y, x, y);
                out.push(self.viewport_changed());
            }
        }
        out
    }

    fn viewport_changed(&self) -> MapEvent {
        MapEvent::ViewportChanged {
            world_rect: self.viewport.visible_world_rect(self.view_w, self.view_h),
            zoom: self.viewport.scale,
        }
    }
}
