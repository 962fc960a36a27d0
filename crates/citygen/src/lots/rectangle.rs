use std::collections::HashSet;

use crate::config::LotBand;
use crate::geometry::{GridGeometry, GridPos};

use super::types::{BlockCell, Region};

/// Greedy largest rectangle inside a cell set.
///
/// Every member cell is tried as a top-left corner in row-major order. The
/// width runs as far right as the top row stays inside the set, then the
/// height grows while each full row of that width is inside. Ties keep the
/// earlier corner. This is a heuristic and can miss the true maximum when a
/// narrower, taller rectangle would be larger.
pub fn largest_rectangle(cells: &[usize], geo: GridGeometry) -> Option<Region> {
    let present: HashSet<GridPos> = cells.iter().map(|&i| geo.from_index(i)).collect();
    let mut corners: Vec<usize> = cells.to_vec();
    corners.sort_unstable();
    corners.dedup();

    let mut best: Option<Region> = None;
    for corner in corners {
        let tl = geo.from_index(corner);
        let mut width = 0;
        while present.contains(&GridPos::new(tl.x + width, tl.y)) {
            width += 1;
        }
        let mut height = 0;
        while (0..width).all(|dx| present.contains(&GridPos::new(tl.x + dx, tl.y + height))) {
            height += 1;
        }
        let candidate = Region {
            x: tl.x,
            y: tl.y,
            width: width as usize,
            height: height as usize,
        };
        match best {
            Some(b) if candidate.area() <= b.area() => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Replaces a lot's cells with its largest rectangle when that rectangle
/// meets the band minimum on both axes; otherwise keeps the shape and sizes
/// the lot to its bounding box. Returns whether the lot was replaced.
pub fn refine_lot(lot: &mut BlockCell, band: LotBand, geo: GridGeometry) -> bool {
    let Some(rect) = largest_rectangle(&lot.cells, geo) else {
        return false;
    };
    if rect.height >= band.min_y && rect.width >= band.min_x {
        lot.cells = rect.indices(geo);
        lot.width = rect.width;
        lot.height = rect.height;
        lot.rectangular = true;
        true
    } else {
        if let Some(bbox) = Region::bounding(&lot.cells, geo) {
            lot.width = bbox.width;
            lot.height = bbox.height;
        }
        lot.rectangular = false;
        false
    }
}
