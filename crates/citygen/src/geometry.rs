//! Coordinate arithmetic over a square grid.
//!
//! Every neighbourhood query clips to the grid, never yields the centre cell
//! and returns cells in row-major order. Coordinates are signed so callers
//! can probe one step past an edge without underflow.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::CELL_SIZE;

/// Integer cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Index math for a `size x size` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub size: usize,
}

const VON_NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

impl GridGeometry {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Row-major index. Callers must check [`Self::in_bounds`] first.
    #[inline]
    pub fn to_index(&self, x: i32, y: i32) -> usize {
        y as usize * self.size + x as usize
    }

    #[inline]
    pub fn index_of(&self, pos: GridPos) -> usize {
        self.to_index(pos.x, pos.y)
    }

    #[inline]
    pub fn from_index(&self, index: usize) -> GridPos {
        GridPos::new((index % self.size) as i32, (index / self.size) as i32)
    }

    /// World-space centre of a cell.
    pub fn cell_center(&self, index: usize) -> Vec2 {
        let pos = self.from_index(index);
        Vec2::new(
            pos.x as f32 * CELL_SIZE + CELL_SIZE * 0.5,
            pos.y as f32 * CELL_SIZE + CELL_SIZE * 0.5,
        )
    }

    /// 8-connected neighbours.
    pub fn moore_neighbors(&self, x: i32, y: i32) -> Vec<GridPos> {
        self.moore_within_radius(x, y, 1)
    }

    /// 4-connected neighbours, in north, west, east, south order.
    pub fn von_neumann_neighbors(&self, x: i32, y: i32) -> Vec<GridPos> {
        VON_NEUMANN_OFFSETS
            .iter()
            .map(|&(dx, dy)| GridPos::new(x + dx, y + dy))
            .filter(|p| self.in_bounds(p.x, p.y))
            .collect()
    }

    /// Cells with `|dx| + |dy| <= radius`.
    pub fn von_neumann_within_radius(&self, x: i32, y: i32, radius: i32) -> Vec<GridPos> {
        let mut out = Vec::new();
        if radius <= 0 {
            return out;
        }
        for dy in -radius..=radius {
            let span = radius - dy.abs();
            for dx in -span..=span {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                if self.in_bounds(nx, ny) {
                    out.push(GridPos::new(nx, ny));
                }
            }
        }
        out
    }

    /// Cells with `max(|dx|, |dy|) <= radius`.
    pub fn moore_within_radius(&self, x: i32, y: i32, radius: i32) -> Vec<GridPos> {
        let mut out = Vec::new();
        if radius <= 0 {
            return out;
        }
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                if self.in_bounds(nx, ny) {
                    out.push(GridPos::new(nx, ny));
                }
            }
        }
        out
    }

    /// Cells at Chebyshev distance exactly `radius` (the ring of a square).
    pub fn moore_ring(&self, x: i32, y: i32, radius: i32) -> Vec<GridPos> {
        let mut out = Vec::new();
        if radius <= 0 {
            return out;
        }
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx.abs().max(dy.abs()) != radius {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                if self.in_bounds(nx, ny) {
                    out.push(GridPos::new(nx, ny));
                }
            }
        }
        out
    }
}

#[inline]
pub fn manhattan_distance(a: GridPos, b: GridPos) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[inline]
pub fn chebyshev_distance(a: GridPos, b: GridPos) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[inline]
pub fn euclidean_distance(a: GridPos, b: GridPos) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_clean(geo: &GridGeometry, origin: GridPos, cells: &[GridPos]) {
        let unique: HashSet<_> = cells.iter().copied().collect();
        assert_eq!(unique.len(), cells.len(), "duplicates in {cells:?}");
        for c in cells {
            assert!(geo.in_bounds(c.x, c.y), "{c:?} out of bounds");
            assert_ne!(*c, origin, "origin returned");
        }
    }

    #[test]
    fn test_index_roundtrip() {
        let geo = GridGeometry::new(17);
        for idx in [0, 1, 16, 17, 100, 288] {
            let p = geo.from_index(idx);
            assert_eq!(geo.to_index(p.x, p.y), idx);
        }
    }

    #[test]
    fn test_in_bounds_edges() {
        let geo = GridGeometry::new(10);
        assert!(geo.in_bounds(0, 0));
        assert!(geo.in_bounds(9, 9));
        assert!(!geo.in_bounds(-1, 0));
        assert!(!geo.in_bounds(0, 10));
    }

    #[test]
    fn test_neighbor_counts_at_corners_and_centre() {
        let geo = GridGeometry::new(10);
        assert_eq!(geo.moore_neighbors(0, 0).len(), 3);
        assert_eq!(geo.moore_neighbors(5, 5).len(), 8);
        assert_eq!(geo.moore_neighbors(9, 4).len(), 5);
        assert_eq!(geo.von_neumann_neighbors(0, 0).len(), 2);
        assert_eq!(geo.von_neumann_neighbors(5, 5).len(), 4);
    }

    #[test]
    fn test_neighbors_never_include_origin_or_leave_grid() {
        let geo = GridGeometry::new(6);
        for y in 0..6 {
            for x in 0..6 {
                let o = GridPos::new(x, y);
                assert_clean(&geo, o, &geo.moore_neighbors(x, y));
                assert_clean(&geo, o, &geo.von_neumann_neighbors(x, y));
                assert_clean(&geo, o, &geo.moore_within_radius(x, y, 3));
                assert_clean(&geo, o, &geo.von_neumann_within_radius(x, y, 3));
            }
        }
    }

    #[test]
    fn test_radius_shapes() {
        let geo = GridGeometry::new(21);
        // Manhattan ball of radius 2: 2r(r+1) = 12 cells without centre.
        assert_eq!(geo.von_neumann_within_radius(10, 10, 2).len(), 12);
        // Chebyshev square of radius 2: 5*5 - 1.
        assert_eq!(geo.moore_within_radius(10, 10, 2).len(), 24);
        assert_eq!(geo.moore_ring(10, 10, 2).len(), 16);
    }

    #[test]
    fn test_non_positive_radius_is_empty() {
        let geo = GridGeometry::new(5);
        assert!(geo.moore_within_radius(2, 2, 0).is_empty());
        assert!(geo.von_neumann_within_radius(2, 2, -1).is_empty());
        assert!(geo.moore_ring(2, 2, 0).is_empty());
    }

    #[test]
    fn test_distances() {
        let a = GridPos::new(1, 1);
        let b = GridPos::new(4, 5);
        assert_eq!(manhattan_distance(a, b), 7);
        assert_eq!(chebyshev_distance(a, b), 4);
        assert!((euclidean_distance(a, b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_cell_center() {
        let geo = GridGeometry::new(4);
        let c = geo.cell_center(geo.to_index(2, 1));
        assert_eq!(c, Vec2::new(2.5 * CELL_SIZE, 1.5 * CELL_SIZE));
    }
}
