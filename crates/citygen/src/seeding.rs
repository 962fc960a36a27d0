//! District seed placement.

use bevy::prelude::*;

use crate::config::{SeedPolicy, SeedingParams};
use crate::geometry::{manhattan_distance, GridPos};
use crate::grid::{Cell, CityGrid, DistrictId};
use crate::sim_rng::SimRng;

/// Outcome of a placement run. A short report is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub seeds: Vec<GridPos>,
    pub requested: usize,
    pub attempts: usize,
}

impl SeedReport {
    pub fn placed(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_short(&self) -> bool {
        self.placed() < self.requested
    }

    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.placed())
    }
}

/// Rejection-sample up to `count` points whose pairwise Manhattan distance is
/// at least `min_distance`. Attempts are capped at `size * size`, so at most
/// that many points are ever placed.
pub fn sample_spaced_points(
    rng: &mut SimRng,
    size: usize,
    count: usize,
    min_distance: i32,
) -> SeedReport {
    let max_attempts = size.saturating_mul(size);
    let mut report = SeedReport {
        seeds: Vec::with_capacity(count.min(max_attempts)),
        requested: count,
        attempts: 0,
    };
    if size == 0 {
        return report;
    }
    let hi = size as i32 - 1;
    while report.seeds.len() < count && report.attempts < max_attempts {
        let pos = GridPos::new(rng.rand_range(0, hi), rng.rand_range(0, hi));
        let valid = report
            .seeds
            .iter()
            .all(|s| manhattan_distance(*s, pos) >= min_distance);
        if valid {
            report.seeds.push(pos);
        }
        report.attempts += 1;
    }
    report
}

/// Row and column counts for `count` lattice seeds: the column count is the
/// ceiling of the square root, rows are the fewest that cover `count`.
pub fn lattice_shape(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let mut cols = ((count as f64).sqrt() as usize).max(1);
    while cols.checked_mul(cols).is_some_and(|sq| sq < count) {
        cols += 1;
    }
    while cols > 1 && (cols - 1).checked_mul(cols - 1).is_some_and(|sq| sq >= count) {
        cols -= 1;
    }
    (count.div_ceil(cols), cols)
}

/// Seeds on a regular lattice, one per sub-grid cell centre. Surplus lattice
/// slots are dropped in row-major order; coincident points on tiny grids are
/// collapsed. The lattice never holds more slots than the grid has cells.
pub fn place_organized_seeds(size: usize, count: usize) -> SeedReport {
    let fit = count.min(size.saturating_mul(size));
    let (rows, cols) = lattice_shape(fit);
    let mut seeds: Vec<GridPos> = Vec::with_capacity(fit);
    'outer: for r in 0..rows {
        for c in 0..cols {
            if seeds.len() == fit {
                break 'outer;
            }
            let x = ((2 * c + 1) * size / (2 * cols)) as i32;
            let y = ((2 * r + 1) * size / (2 * rows)) as i32;
            let pos = GridPos::new(x, y);
            if !seeds.contains(&pos) {
                seeds.push(pos);
            }
        }
    }
    SeedReport {
        seeds,
        requested: count,
        attempts: rows * cols,
    }
}

pub fn place_random_seeds(rng: &mut SimRng, size: usize, params: &SeedingParams) -> SeedReport {
    sample_spaced_points(rng, size, params.district_count, params.min_seed_distance)
}

/// Places seeds by the configured policy and writes `District(i + 1)` into
/// the grid for the i-th seed.
pub fn place_seeds(grid: &mut CityGrid, rng: &mut SimRng, params: &SeedingParams) -> SeedReport {
    let report = match params.policy {
        SeedPolicy::Random => place_random_seeds(rng, grid.size, params),
        SeedPolicy::Organized => place_organized_seeds(grid.size, params.district_count),
    };
    let geo = grid.geometry();
    for (i, seed) in report.seeds.iter().enumerate() {
        let idx = geo.index_of(*seed);
        grid.cells[idx] = Cell::District(DistrictId(i as u32 + 1));
    }
    if report.is_short() {
        warn!(
            "Seeding placed {} of {} districts after {} attempts",
            report.placed(),
            report.requested,
            report.attempts
        );
    } else {
        debug!("Seeding placed {} districts", report.placed());
    }
    report
}
