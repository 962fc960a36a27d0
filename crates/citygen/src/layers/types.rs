use serde::{Deserialize, Serialize};

use crate::config::LAYER_MAX;

/// One flat integer array over the grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerGrid {
    pub values: Vec<i32>,
    pub size: usize,
}

impl LayerGrid {
    pub fn new(size: usize, baseline: i32) -> Self {
        Self {
            values: vec![baseline; size * size],
            size,
        }
    }

    #[inline]
    pub fn get(&self, idx: usize) -> i32 {
        self.values[idx]
    }

    #[inline]
    pub fn set(&mut self, idx: usize, value: i32) {
        self.values[idx] = value;
    }

    /// Adds `delta` and clamps the result to `[0, LAYER_MAX]`.
    #[inline]
    pub fn add_clamped(&mut self, idx: usize, delta: i32) {
        let v = &mut self.values[idx];
        *v = (*v).saturating_add(delta).clamp(0, LAYER_MAX);
    }

    pub fn sum_over(&self, cells: &[usize]) -> i64 {
        cells.iter().map(|&i| self.values[i] as i64).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Water,
    Electricity,
    Satisfaction,
    Pollution,
    Density,
    RoadAccess,
    Security,
}

impl LayerKind {
    pub const ALL: [LayerKind; 7] = [
        LayerKind::Water,
        LayerKind::Electricity,
        LayerKind::Satisfaction,
        LayerKind::Pollution,
        LayerKind::Density,
        LayerKind::RoadAccess,
        LayerKind::Security,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Water => "water",
            LayerKind::Electricity => "electricity",
            LayerKind::Satisfaction => "satisfaction",
            LayerKind::Pollution => "pollution",
            LayerKind::Density => "density",
            LayerKind::RoadAccess => "road_access",
            LayerKind::Security => "security",
        }
    }
}

/// The seven simulated layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityLayers {
    pub water: LayerGrid,
    pub electricity: LayerGrid,
    pub satisfaction: LayerGrid,
    pub pollution: LayerGrid,
    pub density: LayerGrid,
    pub road_access: LayerGrid,
    pub security: LayerGrid,
}

impl CityLayers {
    pub fn uniform(size: usize, value: i32) -> Self {
        Self {
            water: LayerGrid::new(size, value),
            electricity: LayerGrid::new(size, value),
            satisfaction: LayerGrid::new(size, value),
            pollution: LayerGrid::new(size, value),
            density: LayerGrid::new(size, value),
            road_access: LayerGrid::new(size, value),
            security: LayerGrid::new(size, value),
        }
    }

    pub fn get(&self, kind: LayerKind) -> &LayerGrid {
        match kind {
            LayerKind::Water => &self.water,
            LayerKind::Electricity => &self.electricity,
            LayerKind::Satisfaction => &self.satisfaction,
            LayerKind::Pollution => &self.pollution,
            LayerKind::Density => &self.density,
            LayerKind::RoadAccess => &self.road_access,
            LayerKind::Security => &self.security,
        }
    }

    pub fn get_mut(&mut self, kind: LayerKind) -> &mut LayerGrid {
        match kind {
            LayerKind::Water => &mut self.water,
            LayerKind::Electricity => &mut self.electricity,
            LayerKind::Satisfaction => &mut self.satisfaction,
            LayerKind::Pollution => &mut self.pollution,
            LayerKind::Density => &mut self.density,
            LayerKind::RoadAccess => &mut self.road_access,
            LayerKind::Security => &mut self.security,
        }
    }
}

/// Neighbourhood a building's effect spreads through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadShape {
    VonNeumann,
    Moore,
}

/// Service buildings that modify a layer around themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    WaterTower,
    ElectricityTower,
    School,
    /// Lowers pollution.
    Park,
    PoliceStation,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 5] = [
        BuildingKind::WaterTower,
        BuildingKind::ElectricityTower,
        BuildingKind::School,
        BuildingKind::Park,
        BuildingKind::PoliceStation,
    ];

    pub fn target_layer(self) -> LayerKind {
        match self {
            BuildingKind::WaterTower => LayerKind::Water,
            BuildingKind::ElectricityTower => LayerKind::Electricity,
            BuildingKind::School => LayerKind::Satisfaction,
            BuildingKind::Park => LayerKind::Pollution,
            BuildingKind::PoliceStation => LayerKind::Security,
        }
    }

    pub fn spread_shape(self) -> SpreadShape {
        match self {
            BuildingKind::WaterTower => SpreadShape::VonNeumann,
            _ => SpreadShape::Moore,
        }
    }
}
