//! Road tile selection from the shape of the surrounding districts.

use serde::{Deserialize, Serialize};

use crate::grid::CityGrid;

pub const MASK_N: u8 = 1 << 0;
pub const MASK_NE: u8 = 1 << 1;
pub const MASK_E: u8 = 1 << 2;
pub const MASK_SE: u8 = 1 << 3;
pub const MASK_S: u8 = 1 << 4;
pub const MASK_SW: u8 = 1 << 5;
pub const MASK_W: u8 = 1 << 6;
pub const MASK_NW: u8 = 1 << 7;

const MASK_OFFSETS: [(i32, i32, u8); 8] = [
    (0, -1, MASK_N),
    (1, -1, MASK_NE),
    (1, 0, MASK_E),
    (1, 1, MASK_SE),
    (0, 1, MASK_S),
    (-1, 1, MASK_SW),
    (-1, 0, MASK_W),
    (-1, -1, MASK_NW),
];

/// Tile variant for a road cell. Directions name the open (road) sides,
/// except `Tee*` and `Edge*`, which name the closed side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadTile {
    /// Surrounded by road on all eight sides.
    Interior,
    Isolated,
    DeadEndNorth,
    DeadEndEast,
    DeadEndSouth,
    DeadEndWest,
    StraightNorthSouth,
    StraightEastWest,
    CornerNorthEast,
    CornerEastSouth,
    CornerSouthWest,
    CornerWestNorth,
    TeeNorth,
    TeeEast,
    TeeSouth,
    TeeWest,
    /// Straight road running along the map border.
    EdgeNorth,
    EdgeEast,
    EdgeSouth,
    EdgeWest,
    /// Four-way road with a single district in one diagonal.
    InnerCornerNorthEast,
    InnerCornerSouthEast,
    InnerCornerSouthWest,
    InnerCornerNorthWest,
    Crossroad,
}

impl RoadTile {
    /// Stable numeric id for mesh variant lookup. `Interior` is the default 0.
    pub fn id(self) -> i32 {
        self as i32
    }
}

/// Bit set of in-bounds 8-neighbours that are not road.
pub fn district_mask(grid: &CityGrid, x: i32, y: i32) -> u8 {
    let mut mask = 0;
    for (dx, dy, bit) in MASK_OFFSETS {
        let (nx, ny) = (x + dx, y + dy);
        if grid.in_bounds(nx, ny) && !grid.get(nx, ny).is_road() {
            mask |= bit;
        }
    }
    mask
}

/// Tile for the road or junction at `(x, y)`; `None` for any other cell.
pub fn road_tile(grid: &CityGrid, x: i32, y: i32) -> Option<RoadTile> {
    if !grid.get(x, y).is_road() {
        return None;
    }
    let mask = district_mask(grid, x, y);
    if mask == 0 {
        return Some(RoadTile::Interior);
    }
    let road = |dx: i32, dy: i32| grid.get(x + dx, y + dy).is_road();
    let (n, e, s, w) = (road(0, -1), road(1, 0), road(0, 1), road(-1, 0));
    let tile = match (n, e, s, w) {
        (false, false, false, false) => RoadTile::Isolated,
        (true, false, false, false) => RoadTile::DeadEndNorth,
        (false, true, false, false) => RoadTile::DeadEndEast,
        (false, false, true, false) => RoadTile::DeadEndSouth,
        (false, false, false, true) => RoadTile::DeadEndWest,
        (true, false, true, false) => {
            if !grid.in_bounds(x - 1, y) {
                RoadTile::EdgeWest
            } else if !grid.in_bounds(x + 1, y) {
                RoadTile::EdgeEast
            } else {
                RoadTile::StraightNorthSouth
            }
        }
        (false, true, false, true) => {
            if !grid.in_bounds(x, y - 1) {
                RoadTile::EdgeNorth
            } else if !grid.in_bounds(x, y + 1) {
                RoadTile::EdgeSouth
            } else {
                RoadTile::StraightEastWest
            }
        }
        (true, true, false, false) => RoadTile::CornerNorthEast,
        (false, true, true, false) => RoadTile::CornerEastSouth,
        (false, false, true, true) => RoadTile::CornerSouthWest,
        (true, false, false, true) => RoadTile::CornerWestNorth,
        (false, true, true, true) => RoadTile::TeeNorth,
        (true, false, true, true) => RoadTile::TeeEast,
        (true, true, false, true) => RoadTile::TeeSouth,
        (true, true, true, false) => RoadTile::TeeWest,
        (true, true, true, true) => match mask {
            MASK_NE => RoadTile::InnerCornerNorthEast,
            MASK_SE => RoadTile::InnerCornerSouthEast,
            MASK_SW => RoadTile::InnerCornerSouthWest,
            MASK_NW => RoadTile::InnerCornerNorthWest,
            _ => RoadTile::Crossroad,
        },
    };
    Some(tile)
}

/// Tile per cell, row-major.
pub fn road_tiles(grid: &CityGrid) -> Vec<Option<RoadTile>> {
    let geo = grid.geometry();
    (0..grid.cells.len())
        .map(|idx| {
            let p = geo.from_index(idx);
            road_tile(grid, p.x, p.y)
        })
        .collect()
}
