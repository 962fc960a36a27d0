use serde::{Deserialize, Serialize};

use crate::districts::District;
use crate::grid::CityGrid;

use super::types::LayerGrid;

/// Presentation layers computed once zoning and lots are final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedLayers {
    /// 100 on road and junction cells, 0 elsewhere.
    pub road: LayerGrid,
    /// Zoning code of the owning district, -1 off-district.
    pub zoning: LayerGrid,
    /// Zoning code on cells covered by a lot, -1 elsewhere.
    pub building: LayerGrid,
    /// Foliage variant id, 0 where nothing grows.
    pub vegetation: LayerGrid,
}

pub fn road_layer(grid: &CityGrid) -> LayerGrid {
    LayerGrid {
        values: grid
            .cells
            .iter()
            .map(|c| if c.is_road() { 100 } else { 0 })
            .collect(),
        size: grid.size,
    }
}

pub fn zoning_layer(size: usize, districts: &[District]) -> LayerGrid {
    let mut layer = LayerGrid::new(size, -1);
    for district in districts {
        for &idx in &district.cells {
            layer.set(idx, district.zoning.code());
        }
    }
    layer
}

pub fn building_layer(size: usize, districts: &[District]) -> LayerGrid {
    let mut layer = LayerGrid::new(size, -1);
    for district in districts {
        for lot in &district.lots {
            for &idx in &lot.cells {
                layer.set(idx, district.zoning.code());
            }
        }
    }
    layer
}
