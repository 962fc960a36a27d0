use serde::{Deserialize, Serialize};

use crate::grid::DistrictId;
use crate::layers::LayerKind;
use crate::lots::BlockCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zoning {
    #[default]
    Empty = 0,
    Residential = 1,
    Commercial = 2,
    Industrial = 3,
}

impl Zoning {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Inverse of [`Zoning::code`]; unknown codes read as `Empty`.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Zoning::Residential,
            2 => Zoning::Commercial,
            3 => Zoning::Industrial,
            _ => Zoning::Empty,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zoning::Empty => "Unzoned",
            Zoning::Residential => "Residential",
            Zoning::Commercial => "Commercial",
            Zoning::Industrial => "Industrial",
        }
    }
}

/// Mean layer value over a district's cells, as a fraction of the layer
/// maximum. Every field lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerFractions {
    pub water: f32,
    pub electricity: f32,
    pub satisfaction: f32,
    pub pollution: f32,
    pub density: f32,
    pub road_access: f32,
    pub security: f32,
}

impl LayerFractions {
    pub fn get(&self, kind: LayerKind) -> f32 {
        match kind {
            LayerKind::Water => self.water,
            LayerKind::Electricity => self.electricity,
            LayerKind::Satisfaction => self.satisfaction,
            LayerKind::Pollution => self.pollution,
            LayerKind::Density => self.density,
            LayerKind::RoadAccess => self.road_access,
            LayerKind::Security => self.security,
        }
    }

    pub fn set(&mut self, kind: LayerKind, value: f32) {
        match kind {
            LayerKind::Water => self.water = value,
            LayerKind::Electricity => self.electricity = value,
            LayerKind::Satisfaction => self.satisfaction = value,
            LayerKind::Pollution => self.pollution = value,
            LayerKind::Density => self.density = value,
            LayerKind::RoadAccess => self.road_access = value,
            LayerKind::Security => self.security = value,
        }
    }
}

/// Per-layer threshold results. `low_pollution` is true when pollution is
/// below its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sufficiency {
    pub water: bool,
    pub electricity: bool,
    pub satisfaction: bool,
    pub low_pollution: bool,
    pub density: bool,
    pub road_access: bool,
    pub security: bool,
}

impl Sufficiency {
    pub fn residential(&self) -> bool {
        self.water && self.electricity && self.satisfaction && self.low_pollution && self.security
    }

    pub fn commercial(&self) -> bool {
        self.water && self.electricity && self.density && self.road_access && self.security
    }

    pub fn industrial(&self) -> bool {
        self.water && self.electricity && self.road_access && self.low_pollution
    }
}

/// A grown district and everything later stages attach to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: DistrictId,
    pub zoning: Zoning,
    /// Member grid indices, row-major.
    pub cells: Vec<usize>,
    /// Zonings the district qualified for at classification.
    pub available: Vec<Zoning>,
    pub fractions: LayerFractions,
    pub lots: Vec<BlockCell>,
}

impl District {
    pub fn new(id: DistrictId) -> Self {
        Self {
            id,
            zoning: Zoning::Empty,
            cells: Vec::new(),
            available: Vec::new(),
            fractions: LayerFractions::default(),
            lots: Vec::new(),
        }
    }
}
