use serde::{Deserialize, Serialize};

use crate::districts::{District, Zoning};
use crate::sim_rng::SimRng;

use super::types::LayerGrid;

/// Decorative planting on open residential ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Foliage {
    Tree = 1,
    TallTree = 2,
    Conifer = 3,
    Grass = 4,
    TallGrass = 5,
    Bush = 6,
}

impl Foliage {
    /// Maps a roll in `0..=100` to a variant: 5% for each tree kind, 20%
    /// for each grass kind, 10% bush, nothing otherwise.
    pub fn from_roll(roll: i32) -> Option<Foliage> {
        match roll {
            r if r < 5 => Some(Foliage::Tree),
            r if r < 10 => Some(Foliage::TallTree),
            r if r < 15 => Some(Foliage::Conifer),
            r if r < 35 => Some(Foliage::Grass),
            r if r < 55 => Some(Foliage::TallGrass),
            r if r < 65 => Some(Foliage::Bush),
            _ => None,
        }
    }
}

/// Rolls foliage for residential district cells that no lot covers, in
/// row-major order. Every other cell is 0.
pub fn vegetation_layer(size: usize, districts: &[District], rng: &mut SimRng) -> LayerGrid {
    let mut open = vec![false; size * size];
    for district in districts.iter().filter(|d| d.zoning == Zoning::Residential) {
        for &idx in &district.cells {
            open[idx] = true;
        }
        for lot in &district.lots {
            for &idx in &lot.cells {
                open[idx] = false;
            }
        }
    }
    let mut layer = LayerGrid::new(size, 0);
    for (idx, _) in open.iter().enumerate().filter(|(_, o)| **o) {
        if let Some(foliage) = Foliage::from_roll(rng.rand_range(0, 100)) {
            layer.set(idx, foliage as i32);
        }
    }
    layer
}
