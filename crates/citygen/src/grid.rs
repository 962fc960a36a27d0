use serde::{Deserialize, Serialize};

use crate::config::{RAW_EMPTY, RAW_JUNCTION, RAW_ROAD};
use crate::error::CityGenError;
use crate::geometry::{GridGeometry, GridPos};

/// Identifier of a grown district. Ids are dense and start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DistrictId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Road,
    Junction,
    District(DistrictId),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// True for plain roads and junctions alike.
    #[inline]
    pub fn is_road(self) -> bool {
        matches!(self, Cell::Road | Cell::Junction)
    }

    #[inline]
    pub fn is_junction(self) -> bool {
        matches!(self, Cell::Junction)
    }

    #[inline]
    pub fn is_district(self) -> bool {
        matches!(self, Cell::District(_))
    }

    #[inline]
    pub fn district_id(self) -> Option<DistrictId> {
        match self {
            Cell::District(id) => Some(id),
            _ => None,
        }
    }

    pub fn to_raw(self) -> i32 {
        match self {
            Cell::Empty => RAW_EMPTY,
            Cell::Road => RAW_ROAD,
            Cell::Junction => RAW_JUNCTION,
            Cell::District(DistrictId(id)) => id as i32,
        }
    }

    /// Decodes the transport integer. Unknown negative values read as empty.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            RAW_ROAD => Cell::Road,
            RAW_JUNCTION => Cell::Junction,
            v if v > 0 => Cell::District(DistrictId(v as u32)),
            _ => Cell::Empty,
        }
    }
}

/// The district/road grid every pipeline stage reads or rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityGrid {
    pub cells: Vec<Cell>,
    pub size: usize,
}

impl CityGrid {
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![Cell::Empty; size * size],
            size,
        }
    }

    pub fn from_raw(values: &[i32], size: usize) -> Result<Self, CityGenError> {
        if size.checked_mul(size) != Some(values.len()) {
            return Err(CityGenError::GridSizeMismatch {
                expected: size.saturating_mul(size),
                found: values.len(),
            });
        }
        Ok(Self {
            cells: values.iter().map(|&v| Cell::from_raw(v)).collect(),
            size,
        })
    }

    pub fn to_raw(&self) -> Vec<i32> {
        self.cells.iter().map(|c| c.to_raw()).collect()
    }

    #[inline]
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.size)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.geometry().in_bounds(x, y)
    }

    /// Out-of-bounds reads return `Cell::Empty`.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if self.in_bounds(x, y) {
            self.cells[self.geometry().to_index(x, y)]
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn at(&self, pos: GridPos) -> Cell {
        self.get(pos.x, pos.y)
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), CityGenError> {
        if !self.in_bounds(x, y) {
            return Err(CityGenError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        let idx = self.geometry().to_index(x, y);
        self.cells[idx] = cell;
        Ok(())
    }

    pub fn count(&self, pred: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(**c)).count()
    }

    pub fn empty_count(&self) -> usize {
        self.count(Cell::is_empty)
    }

    /// Distinct district ids among `positions`, in first-seen order.
    pub fn distinct_districts(&self, positions: &[GridPos]) -> Vec<DistrictId> {
        let mut out: Vec<DistrictId> = Vec::with_capacity(positions.len());
        for p in positions {
            if let Some(id) = self.at(*p).district_id() {
                if !out.contains(&id) {
                    out.push(id);
                }
            }
        }
        out
    }

    /// Distinct district ids in the 8-neighbourhood of `(x, y)`.
    pub fn moore_districts(&self, x: i32, y: i32) -> Vec<DistrictId> {
        self.distinct_districts(&self.geometry().moore_neighbors(x, y))
    }

    /// Distinct district ids in the 4-neighbourhood of `(x, y)`.
    pub fn von_neumann_districts(&self, x: i32, y: i32) -> Vec<DistrictId> {
        self.distinct_districts(&self.geometry().von_neumann_neighbors(x, y))
    }
}
