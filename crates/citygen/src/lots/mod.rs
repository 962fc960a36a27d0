//! Lot subdivision: BSP partitioning of each district, largest-rectangle
//! refinement of every leaf and street facing.

mod bsp;
mod facing;
mod rectangle;
mod types;

use bevy::prelude::*;

pub use bsp::{partition_district, BspOutcome};
pub use facing::lot_facing;
pub use rectangle::{largest_rectangle, refine_lot};
pub use types::{BlockCell, Facing, LotIdGen, Region};

use crate::config::LotParams;
use crate::districts::District;
use crate::grid::CityGrid;
use crate::layers::LayerGrid;
use crate::sim_rng::SimRng;

/// Totals over every district.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LotSummary {
    pub lots: usize,
    pub discarded: usize,
    pub rectangular: usize,
    pub irregular: usize,
}

/// Replaces each district's lots with a fresh subdivision.
pub fn subdivide_districts(
    districts: &mut [District],
    grid: &CityGrid,
    road_access: &LayerGrid,
    params: &LotParams,
    rng: &mut SimRng,
) -> LotSummary {
    let geo = grid.geometry();
    let mut summary = LotSummary::default();
    for district in districts.iter_mut() {
        let band = params.band_for(district.zoning);
        let mut ids = LotIdGen::default();
        let outcome = partition_district(&district.cells, band, geo, road_access, &mut ids, rng);
        summary.discarded += outcome.discarded;
        district.lots = outcome.lots;
        for lot in &mut district.lots {
            let original = lot.clone();
            let mut rectangular = refine_lot(lot, band, geo);
            if rectangular && !lot.cells.iter().any(|&i| road_access.get(i) > 0) {
                // The rectangle lost every road-accessible cell.
                *lot = original;
                rectangular = false;
            }
            if rectangular {
                summary.rectangular += 1;
            } else {
                summary.irregular += 1;
            }
            lot.facing = lot_facing(&lot.cells, grid);
        }
        summary.lots += district.lots.len();
    }
    if summary.discarded > 0 {
        warn!(
            "Discarded {} lots without road access",
            summary.discarded
        );
    }
    info!(
        "Subdivided {} districts into {} lots ({} rectangular)",
        districts.len(),
        summary.lots,
        summary.rectangular
    );
    summary
}
