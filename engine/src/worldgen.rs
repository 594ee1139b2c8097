use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tribemap_shared::{
    BonusKind, GridCoord, NearbyVillage, TerrainKind, Village, VillageError, VillageKind,
};

use crate::spatial::{VillageId, VillageIndex};

/// Terrain field thresholds: below `WATER_LEVEL` the cell is water, above
/// `MOUNTAIN_LEVEL` it is mountain; the band in between is rolled among
/// plain / forest / desert.
const WATER_LEVEL: f64 = -0.3;
const MOUNTAIN_LEVEL: f64 = 0.4;
const FOREST_CHANCE: f64 = 0.20;
const DESERT_CHANCE: f64 = 0.15;

/// World-generation parameters. The same config generates the same world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenConfig {
    pub world_size: u32,
    pub seed: u64,
    pub hostile_count: usize,
    pub abandoned_count: usize,
    pub bonus_count: usize,
}

impl GenConfig {
    /// Settlement counts proportional to world area, at the reference
    /// density of 30/20/15 per 50x50.
    pub fn new(world_size: u32, seed: u64) -> Self {
        let area = (world_size as usize).pow(2);
        Self {
            world_size,
            seed,
            hostile_count: area * 30 / 2500,
            abandoned_count: area * 20 / 2500,
            bonus_count: area * 15 / 2500,
        }
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self::new(50, 0)
    }
}

/// The generated world: villages plus their spatial index. Terrain is not
/// stored at all; it is a pure function of (seed, coordinate), evaluated
/// lazily for whatever cells are visible.
#[derive(Debug, Clone)]
pub struct World {
    world_size: u32,
    seed: u64,
    villages: Vec<Village>,
    index: VillageIndex,
}

impl World {
    pub fn world_size(&self) -> u32 {
        self.world_size
    }

    pub fn villages(&self) -> &[Village] {
        &self.villages
    }

    pub fn village(&self, id: VillageId) -> &Village {
        &self.villages[id]
    }

    /// The player's own village. Generation always places it first.
    pub fn player(&self) -> &Village {
        &self.villages[0]
    }

    pub fn village_at(&self, coord: GridCoord) -> Option<VillageId> {
        self.index.village_at(coord)
    }

    pub fn index(&self) -> &VillageIndex {
        &self.index
    }

    pub fn terrain_at(&self, coord: GridCoord) -> TerrainKind {
        terrain_at(self.seed, self.world_size, coord)
    }

    /// Fold a remote nearby-village feed into the set. Entries with
    /// out-of-range or already-occupied coordinates are dropped with a
    /// diagnostic; the uniqueness invariant is never at risk. Returns the
    /// number of villages actually merged.
    pub fn merge_remote(&mut self, feed: Vec<NearbyVillage>) -> usize {
        let mut merged = 0;
        for entry in feed {
            match entry.into_village(self.world_size) {
                Ok(village) => {
                    if self.index.contains(village.coord) {
                        let err = VillageError::Occupied {
                            coord: village.coord,
                        };
                        warn!("dropping remote village {:?}: {err}", village.name);
                        continue;
                    }
                    let id = self.villages.len();
                    self.index.insert(village.coord, id);
                    self.villages.push(village);
                    merged += 1;
                }
                Err(err) => warn!("dropping remote village: {err}"),
            }
        }
        merged
    }
}

/// Generate a world: one player village at `player_coord`, then the
/// configured numbers of hostile, abandoned and bonus settlements at
/// uniformly random free cells (occupied draws are resampled, which is what
/// guarantees coordinate uniqueness).
pub fn generate(config: &GenConfig, player_coord: GridCoord) -> Result<World, VillageError> {
    let size = config.world_size;
    let requested = 1 + config.hostile_count + config.abandoned_count + config.bonus_count;
    let capacity = (size as usize).pow(2);
    // Rejection resampling in free_cell never terminates once the grid is
    // full, so over-capacity configs are rejected before placement starts.
    if requested > capacity {
        return Err(VillageError::WorldFull {
            requested,
            capacity,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut villages = Vec::with_capacity(
        1 + config.hostile_count + config.abandoned_count + config.bonus_count,
    );
    let mut index = VillageIndex::build(&[], size);

    let player = Village::new(player_coord, VillageKind::Player, "Your Village", "You", size)?
        .with_stats(5000, 500, 15);
    index.insert(player.coord, 0);
    villages.push(player);

    for i in 0..config.hostile_count {
        let coord = free_cell(&mut rng, &index, size);
        let village = Village::new(
            coord,
            VillageKind::Hostile,
            format!("Village {}", i + 1),
            format!("Player {}", i + 1),
            size,
        )?
        .with_stats(
            rng.gen_range(1_000..11_000),
            rng.gen_range(100..1_100),
            rng.gen_range(1..21),
        );
        index.insert(coord, villages.len());
        villages.push(village);
    }

    for i in 0..config.abandoned_count {
        let coord = free_cell(&mut rng, &index, size);
        let resources = rng.gen_range(500..5_500);
        let village = Village::new(
            coord,
            VillageKind::Abandoned,
            format!("Ruins {}", i + 1),
            "Abandoned",
            size,
        )?
        .with_resources(resources);
        index.insert(coord, villages.len());
        villages.push(village);
    }

    for _ in 0..config.bonus_count {
        let coord = free_cell(&mut rng, &index, size);
        let bonus = BonusKind::ALL[rng.gen_range(0..BonusKind::ALL.len())];
        let village = Village::new(
            coord,
            VillageKind::Bonus,
            bonus.display_name(),
            "Unclaimed",
            size,
        )?
        .with_bonus(bonus);
        index.insert(coord, villages.len());
        villages.push(village);
    }

    debug!(
        "generated {}x{} world, seed {}: {} villages",
        size,
        size,
        config.seed,
        villages.len()
    );
    Ok(World {
        world_size: size,
        seed: config.seed,
        villages,
        index,
    })
}

fn free_cell(rng: &mut ChaCha8Rng, index: &VillageIndex, world_size: u32) -> GridCoord {
    loop {
        let coord = GridCoord::new(
            rng.gen_range(0..world_size as i32),
            rng.gen_range(0..world_size as i32),
        );
        if !index.contains(coord) {
            return coord;
        }
    }
}

/// Terrain of a cell, a pure function of the world seed and coordinate.
///
/// A smooth sinusoidal field biases the extremes (water troughs, mountain
/// crests) so biomes come out spatially coherent; the middle band draws
/// from a per-cell rng stream, with desert gated to the south-east quadrant.
pub fn terrain_at(seed: u64, world_size: u32, coord: GridCoord) -> TerrainKind {
    let field = ((coord.x as f64 * 0.2).sin() + (coord.y as f64 * 0.2).cos()) * 0.5;
    if field < WATER_LEVEL {
        return TerrainKind::Water;
    }
    if field > MOUNTAIN_LEVEL {
        return TerrainKind::Mountain;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(cell_seed(seed, coord));
    let roll: f64 = rng.gen_range(0.0..1.0);
    if roll < FOREST_CHANCE {
        TerrainKind::Forest
    } else if roll < FOREST_CHANCE + DESERT_CHANCE && in_desert_quadrant(coord, world_size) {
        TerrainKind::Desert
    } else {
        TerrainKind::Plain
    }
}

fn in_desert_quadrant(coord: GridCoord, world_size: u32) -> bool {
    let half = (world_size / 2) as i32;
    coord.x >= half && coord.y >= half
}

/// Mix the world seed with the cell coordinate into an independent per-cell
/// rng seed, so any cell's terrain can be evaluated without its neighbours.
fn cell_seed(seed: u64, coord: GridCoord) -> u64 {
    let mut s = seed;
    s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    s ^= (coord.x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    s ^= (coord.y as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    s
}
