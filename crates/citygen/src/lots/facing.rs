use crate::geometry::GridGeometry;
use crate::grid::CityGrid;

use super::types::Facing;

const SIDES: [(Facing, i32, i32); 4] = [
    (Facing::North, 0, -1),
    (Facing::East, 1, 0),
    (Facing::South, 0, 1),
    (Facing::West, -1, 0),
];

/// The side with the most edge cells directly touching a road. Ties go to
/// the first of north, east, south, west; no road contact gives
/// `Facing::None`.
pub fn lot_facing(cells: &[usize], grid: &CityGrid) -> Facing {
    let geo: GridGeometry = grid.geometry();
    let mut best = (Facing::None, 0usize);
    for (side, dx, dy) in SIDES {
        let touching = cells
            .iter()
            .map(|&i| geo.from_index(i))
            .filter(|p| grid.get(p.x + dx, p.y + dy).is_road())
            .count();
        if touching > best.1 {
            best = (side, touching);
        }
    }
    best.0
}
