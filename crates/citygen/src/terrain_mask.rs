//! Binary cave-style terrain mask grown by a cellular automaton.
//!
//! Cells are either wall (`true`) or open. Neighbourhood counts treat every
//! position outside the map as wall, so the automaton closes the borders.
//! The mask is a standalone generator; the city pipeline does not consume it.

use serde::{Deserialize, Serialize};

use crate::sim_rng::SimRng;

/// Steps run by [`TerrainMask::finalize`].
pub const FINALIZE_STEPS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainMaskParams {
    pub width: usize,
    pub height: usize,
    /// Chance for a cell to start as wall.
    pub alive_chance: f32,
    /// A wall with fewer wall neighbours than this opens up.
    pub death_limit: u8,
    /// An open cell with more wall neighbours than this becomes wall.
    pub birth_limit: u8,
}

impl Default for TerrainMaskParams {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            alive_chance: 0.45,
            death_limit: 3,
            birth_limit: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainMask {
    pub cells: Vec<bool>,
    pub width: usize,
    pub height: usize,
}

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl TerrainMask {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    /// Row-major random fill: each cell is wall with `alive_chance`.
    pub fn random_fill(params: &TerrainMaskParams, rng: &mut SimRng) -> Self {
        let mut mask = Self::new(params.width, params.height);
        for cell in &mut mask.cells {
            *cell = rng.frand() < params.alive_chance;
        }
        mask
    }

    /// Parses rows of `#` (wall) and `.` (open).
    pub fn from_ascii(text: &str) -> Self {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut mask = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(width).enumerate() {
                mask.cells[y * width + x] = ch == '#';
            }
        }
        mask
    }

    pub fn to_ascii(&self) -> String {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|w| if *w { '#' } else { '.' }).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        !self.in_bounds(x, y) || self.cells[y as usize * self.width + x as usize]
    }

    /// Wall neighbours among the eight surrounding positions, counting
    /// out-of-bounds positions as wall.
    pub fn count_walls(&self, x: i32, y: i32) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dx, dy)| self.is_wall(x + dx, y + dy))
            .count() as u8
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|w| **w).count()
    }

    /// Synchronous update: `rule(is_wall, wall_neighbours)` gives the next
    /// state of each cell.
    fn apply(&mut self, rule: impl Fn(bool, u8) -> bool) {
        let mut next = self.cells.clone();
        for y in 0..self.height {
            for x in 0..self.width {
                let count = self.count_walls(x as i32, y as i32);
                next[y * self.width + x] = rule(self.cells[y * self.width + x], count);
            }
        }
        self.cells = next;
    }

    /// Birth/death step with the configured limits.
    pub fn step(&mut self, params: &TerrainMaskParams) {
        let (death, birth) = (params.death_limit, params.birth_limit);
        self.apply(|wall, count| if wall { count >= death } else { count > birth });
    }

    /// Clumps walls together: open cells with more than 3 wall neighbours
    /// close, walls with fewer than 5 open up.
    pub fn grouping_step(&mut self) {
        self.apply(|wall, count| if wall { count >= 5 } else { count > 3 });
    }

    /// Majority smoothing: open cells with more than 4 wall neighbours
    /// close, walls with fewer than 4 open up.
    pub fn smoothing_step(&mut self) {
        self.apply(|wall, count| if wall { count >= 4 } else { count > 4 });
    }

    pub fn finalize(&mut self, params: &TerrainMaskParams) {
        for _ in 0..FINALIZE_STEPS {
            self.step(params);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_counts_as_wall() {
        let mask = TerrainMask::new(3, 3);
        assert_eq!(mask.count_walls(0, 0), 5);
        assert_eq!(mask.count_walls(1, 0), 3);
        assert_eq!(mask.count_walls(1, 1), 0);
    }

    #[test]
    fn test_random_fill_is_deterministic() {
        let params = TerrainMaskParams::default();
        let a = TerrainMask::random_fill(&params, &mut SimRng::from_seed_u64(1337));
        let b = TerrainMask::random_fill(&params, &mut SimRng::from_seed_u64(1337));
        assert_eq!(a, b);
        let walls = a.wall_count();
        // 45% of 4096 cells, with generous slack.
        assert!((1500..2200).contains(&walls), "walls = {walls}");
    }

    #[test]
    fn test_zero_alive_chance_fills_nothing() {
        let params = TerrainMaskParams {
            alive_chance: 0.0,
            ..TerrainMaskParams::default()
        };
        let mask = TerrainMask::random_fill(&params, &mut SimRng::default());
        assert_eq!(mask.wall_count(), 0);
    }

    #[test]
    fn test_step_birth_and_death() {
        let params = TerrainMaskParams::default();
        // A lone wall dies; the open corner cell sees 5 walls and is born.
        let mut mask = TerrainMask::from_ascii(
            ".....\n\
             .....\n\
             ..#..\n\
             .....\n\
             .....",
        );
        mask.step(&params);
        assert!(!mask.is_wall(2, 2));
        assert!(mask.is_wall(0, 0));
        assert!(!mask.is_wall(1, 0));
    }

    #[test]
    fn test_smoothing_fills_enclosed_hole() {
        let mut mask = TerrainMask::from_ascii(
            "###\n\
             #.#\n\
             ###",
        );
        mask.smoothing_step();
        assert_eq!(mask.wall_count(), 9);
    }

    #[test]
    fn test_grouping_opens_thin_walls() {
        let mut mask = TerrainMask::from_ascii(
            ".....\n\
             .....\n\
             #####\n\
             .....\n\
             .....",
        );
        mask.grouping_step();
        // Interior wall cells see only two wall neighbours.
        assert!(!mask.is_wall(2, 2));
    }

    #[test]
    fn test_finalize_runs_fixed_step_count() {
        let params = TerrainMaskParams {
            width: 20,
            height: 20,
            ..TerrainMaskParams::default()
        };
        let mut rng = SimRng::from_seed_u64(4);
        let start = TerrainMask::random_fill(&params, &mut rng);

        let mut finalized = start.clone();
        finalized.finalize(&params);

        let mut stepped = start;
        for _ in 0..FINALIZE_STEPS {
            stepped.step(&params);
        }
        assert_eq!(finalized, stepped);
    }

    #[test]
    fn test_ascii_round_trip() {
        let text = "#..\n.#.\n..#";
        assert_eq!(TerrainMask::from_ascii(text).to_ascii(), text);
    }
}
