use serde::{Deserialize, Serialize};

use crate::geometry::GridGeometry;

/// Side of a lot that faces the street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    North,
    East,
    South,
    West,
    #[default]
    None,
}

/// One building lot inside a district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCell {
    /// Unique within the owning district.
    pub id: u32,
    /// Member grid indices, row-major.
    pub cells: Vec<usize>,
    pub width: usize,
    pub height: usize,
    pub facing: Facing,
    /// True once the cells were replaced by their largest rectangle.
    pub rectangular: bool,
}

/// Hands out lot ids in increasing order, starting at 0.
#[derive(Debug, Clone, Default)]
pub struct LotIdGen {
    next: u32,
}

impl LotIdGen {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn issued(&self) -> u32 {
        self.next
    }
}

/// Axis-aligned cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
}

impl Region {
    /// Bounding box of a set of grid indices; `None` when empty.
    pub fn bounding(cells: &[usize], geo: GridGeometry) -> Option<Region> {
        let mut iter = cells.iter().map(|&i| geo.from_index(i));
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Region {
            x: min_x,
            y: min_y,
            width: (max_x - min_x + 1) as usize,
            height: (max_y - min_y + 1) as usize,
        })
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x + self.width as i32
            && y < self.y + self.height as i32
    }

    /// Grid indices covered by the region, row-major.
    pub fn indices(&self, geo: GridGeometry) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.area());
        for dy in 0..self.height as i32 {
            for dx in 0..self.width as i32 {
                out.push(geo.to_index(self.x + dx, self.y + dy));
            }
        }
        out
    }
}
