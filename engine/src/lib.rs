pub mod input;
pub mod map;
pub mod minimap;
pub mod render_set;
pub mod selection;
pub mod spatial;
pub mod viewport;
pub mod worldgen;

pub use input::InputEvent;
pub use map::{MapEngine, MapEvent};
pub use minimap::{Minimap, MinimapPoint, MinimapRect};
pub use render_set::{visible_set, RenderSet, TerrainCell};
pub use selection::SelectionState;
pub use spatial::{VillageId, VillageIndex};
pub use viewport::{Viewport, WorldRect};
pub use worldgen::{generate, terrain_at, GenConfig, World};
