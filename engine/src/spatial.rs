use std::collections::HashMap;

use tribemap_shared::{GridCoord, Village};

/// Stable handle into the current village set. Ids are invalidated only when
/// the whole set is replaced, never by pan/zoom/selection.
pub type VillageId = usize;

/// Grid cells per bucket side in the coarse tile index.
const BUCKET_CELLS: i32 = 16;

/// Spatial index over the village set: a hashed exact-coordinate lookup for
/// O(1) hit-testing plus a coarse bucket grid for rectangle queries.
/// Rebuilt only when the village set changes (generation or remote merge).
#[derive(Debug, Clone, Default)]
pub struct VillageIndex {
    exact: HashMap<GridCoord, VillageId>,
    buckets: Vec<Vec<VillageId>>,
    bucket_cols: i32,
}

impl VillageIndex {
    pub fn build(villages: &[Village], world_size: u32) -> Self {
        let bucket_cols = (world_size.div_ceil(BUCKET_CELLS as u32) as i32).max(1);
        let mut index = Self {
            exact: HashMap::with_capacity(villages.len()),
            buckets: vec![Vec::new(); (bucket_cols * bucket_cols) as usize],
            bucket_cols,
        };
        for (id, village) in villages.iter().enumerate() {
            index.insert(village.coord, id);
        }
        index
    }

    /// Register a village. The caller upholds uniqueness via [`contains`]
    /// before constructing the village.
    pub fn insert(&mut self, coord: GridCoord, id: VillageId) {
        self.exact.insert(coord, id);
        let bucket = self.bucket_of(coord);
        self.buckets[bucket].push(id);
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        self.exact.contains_key(&coord)
    }

    /// Village occupying a cell, if any. O(1) average.
    pub fn village_at(&self, coord: GridCoord) -> Option<VillageId> {
        self.exact.get(&coord).copied()
    }

    /// All villages whose cell lies within the inclusive grid rectangle.
    /// Touches only the buckets overlapping the rectangle, so cost tracks
    /// the query area rather than the world size.
    pub fn query_rect(
        &self,
        villages: &[Village],
        min: GridCoord,
        max: GridCoord,
    ) -> Vec<VillageId> {
        let col_start = (min.x.div_euclid(BUCKET_CELLS)).clamp(0, self.bucket_cols - 1);
        let col_end = (max.x.div_euclid(BUCKET_CELLS)).clamp(0, self.bucket_cols - 1);
        let row_start = (min.y.div_euclid(BUCKET_CELLS)).clamp(0, self.bucket_cols - 1);
        let row_end = (max.y.div_euclid(BUCKET_CELLS)).clamp(0, self.bucket_cols - 1);

        let mut out = Vec::new();
        for row in row_start..=row_end {
            for col in col_start..=col_end {
                for &id in &self.buckets[(row * self.bucket_cols + col) as usize] {
                    let c = villages[id].coord;
                    if c.x >= min.x && c.x <= max.x && c.y >= min.y && c.y <= max.y {
                        out.push(id);
                    }
                }
            }
        }
        out
    }

    fn bucket_of(&self, coord: GridCoord) -> usize {
        let col = coord.x.div_euclid(BUCKET_CELLS).clamp(0, self.bucket_cols - 1);
        let row = coord.y.div_euclid(BUCKET_CELLS).clamp(0, self.bucket_cols - 1);
        (row * self.bucket_cols + col) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tribemap_shared::VillageKind;

    fn village(x: i32, y: i32) -> Village {
        Village::new(GridCoord::new(x, y), VillageKind::Hostile, "V", "P", 100).unwrap()
    }

    #[test]
    fn exact_lookup_finds_occupied_cells_only() {
        let villages = vec![village(25, 25), village(26, 25)];
        let index = VillageIndex::build(&villages, 100);
        assert_eq!(index.village_at(GridCoord::new(25, 25)), Some(0));
        assert_eq!(index.village_at(GridCoord::new(26, 25)), Some(1));
        assert_eq!(index.village_at(GridCoord::new(25, 26)), None);
    }

    #[test]
    fn rect_query_matches_brute_force() {
        let villages: Vec<Village> = (0..100)
            .map(|i| village((i * 7) % 100, (i * 13) % 100))
            .collect();
        let index = VillageIndex::build(&villages, 100);

        let min = GridCoord::new(10, 20);
        let max = GridCoord::new(47, 63);
        let mut got = index.query_rect(&villages, min, max);
        got.sort_unstable();

        let mut expected: Vec<VillageId> = villages
            .iter()
            .enumerate()
            .filter(|(_, v)| {
                v.coord.x >= min.x && v.coord.x <= max.x && v.coord.y >= min.y && v.coord.y <= max.y
            })
            .map(|(id, _)| id)
            .collect();
        expected.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn worlds_smaller_than_a_bucket_still_index_correctly() {
        let villages = vec![village(3, 3), village(9, 9)];
        let index = VillageIndex::build(&villages, 10);
        assert_eq!(index.village_at(GridCoord::new(9, 9)), Some(1));
        let mut got = index.query_rect(&villages, GridCoord::new(0, 0), GridCoord::new(9, 9));
        got.sort_unstable();
        assert_eq!(got, vec![0, 1]);
    }

    #[test]
    fn rect_query_clamps_out_of_world_rectangles() {
        let villages = vec![village(0, 0), village(99, 99)];
        let index = VillageIndex::build(&villages, 100);
        let got = index.query_rect(&villages, GridCoord::new(-5, -5), GridCoord::new(2, 2));
        assert_eq!(got, vec![0]);
    }
}
