use bevy::prelude::*;

use crate::config::GrowthParams;
use crate::grid::{Cell, CityGrid};
use crate::sim_rng::SimRng;

/// Summary of one [`simulate`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GrowthOutcome {
    pub iterations: u32,
    /// Growth stopped on the stagnation guard rather than a full grid.
    pub stagnated: bool,
    pub remaining_empty: usize,
}

/// One synchronous generation. Every empty cell looks at the previous
/// generation's 8-neighbourhood: a single neighbouring district claims it
/// with probability `growth_probability`, two or more make it a road.
///
/// The RNG is drawn only for cells with exactly one neighbouring district.
pub fn grow_step(grid: &CityGrid, rng: &mut SimRng, params: &GrowthParams) -> CityGrid {
    let mut next = grid.clone();
    let size = grid.size as i32;
    for y in 0..size {
        for x in 0..size {
            if !grid.get(x, y).is_empty() {
                continue;
            }
            let districts = grid.moore_districts(x, y);
            let idx = grid.geometry().to_index(x, y);
            match districts.as_slice() {
                [] => {}
                [only] => {
                    if params.comparison.passes(rng.frand(), params.growth_probability) {
                        next.cells[idx] = Cell::District(*only);
                    }
                }
                _ => next.cells[idx] = Cell::Road,
            }
        }
    }
    next
}

/// Runs [`grow_step`] until no empty cell remains or the grid has been
/// unchanged for more than `stagnation_limit` consecutive generations.
pub fn simulate(grid: &mut CityGrid, rng: &mut SimRng, params: &GrowthParams) -> GrowthOutcome {
    let mut outcome = GrowthOutcome::default();
    let mut unchanged = 0u32;
    while grid.cells.iter().any(|c| c.is_empty()) {
        let next = grow_step(grid, rng, params);
        if next == *grid {
            unchanged += 1;
            if unchanged > params.stagnation_limit {
                outcome.stagnated = true;
                break;
            }
        } else {
            unchanged = 0;
        }
        *grid = next;
        outcome.iterations += 1;
    }
    outcome.remaining_empty = grid.empty_count();
    if outcome.stagnated {
        warn!(
            "Growth stagnated after {} iterations with {} empty cells",
            outcome.iterations, outcome.remaining_empty
        );
    } else {
        debug!("Growth filled the grid in {} iterations", outcome.iterations);
    }
    outcome
}
