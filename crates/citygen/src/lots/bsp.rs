use crate::config::LotBand;
use crate::geometry::GridGeometry;
use crate::layers::LayerGrid;
use crate::sim_rng::SimRng;

use super::types::{BlockCell, Facing, LotIdGen, Region};

/// Lots produced for one district and how many leaves were dropped for
/// lacking road access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BspOutcome {
    pub lots: Vec<BlockCell>,
    pub discarded: usize,
}

/// Recursively splits a district's cells until every region fits `band`.
///
/// A region may split along x when `width > max_x && width >= 2 * min_x`,
/// and symmetrically along y. When both axes may split, the longer side is
/// cut; equal sides are cut along y. The cut lands uniformly in
/// `[min, dim - min]` from the region's edge, cells are divided by actual
/// membership and each non-empty half recurses on its own bounding box.
///
/// Leaves become lots only when some member cell has positive road access.
pub fn partition_district(
    cells: &[usize],
    band: LotBand,
    geo: GridGeometry,
    road_access: &LayerGrid,
    ids: &mut LotIdGen,
    rng: &mut SimRng,
) -> BspOutcome {
    let mut outcome = BspOutcome::default();
    let mut sorted = cells.to_vec();
    sorted.sort_unstable();
    split(&sorted, band, geo, road_access, ids, rng, &mut outcome);
    outcome
}

fn split(
    cells: &[usize],
    band: LotBand,
    geo: GridGeometry,
    road_access: &LayerGrid,
    ids: &mut LotIdGen,
    rng: &mut SimRng,
    out: &mut BspOutcome,
) {
    let Some(region) = Region::bounding(cells, geo) else {
        return;
    };
    let split_x = band.can_split_x(region.width);
    let split_y = band.can_split_y(region.height);

    if !split_x && !split_y {
        if cells.iter().any(|&i| road_access.get(i) > 0) {
            out.lots.push(BlockCell {
                id: ids.next_id(),
                cells: cells.to_vec(),
                width: region.width,
                height: region.height,
                facing: Facing::None,
                rectangular: false,
            });
        } else {
            out.discarded += 1;
        }
        return;
    }

    let vertical = if split_x && split_y {
        region.width > region.height
    } else {
        split_x
    };

    let (first, second): (Vec<usize>, Vec<usize>) = if vertical {
        let at = rng.rand_range(band.min_x as i32, (region.width - band.min_x) as i32);
        let cut = region.x + at;
        cells.iter().partition(|&&i| geo.from_index(i).x < cut)
    } else {
        let at = rng.rand_range(band.min_y as i32, (region.height - band.min_y) as i32);
        let cut = region.y + at;
        cells.iter().partition(|&&i| geo.from_index(i).y < cut)
    };

    for part in [first, second] {
        if !part.is_empty() {
            split(&part, band, geo, road_access, ids, rng, out);
        }
    }
}
