//! Generation parameters.
//!
//! Fixed values live as module constants; everything a caller may tune is
//! grouped into [`CityGenConfig`], a resource that deserializes from partial
//! JSON documents (missing fields keep their defaults).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::districts::Zoning;
use crate::error::CityGenError;
use crate::layers::BuildingKind;

/// World units per grid cell, used for road point locations.
pub const CELL_SIZE: f32 = 100.0;
/// Raw transport encoding of an unassigned cell.
pub const RAW_EMPTY: i32 = -1;
/// Raw transport encoding of a plain road cell.
pub const RAW_ROAD: i32 = 0;
/// Raw transport encoding of a junction cell.
pub const RAW_JUNCTION: i32 = -2;
/// Upper clamp for every simulated layer value.
pub const LAYER_MAX: i32 = 100;

// ---------------------------------------------------------------------------
// Seeding and growth
// ---------------------------------------------------------------------------

/// How district seeds are laid out before growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Rejection sampling with a minimum pairwise Manhattan distance.
    #[default]
    Random,
    /// Regular rows x columns lattice.
    Organized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedingParams {
    pub district_count: usize,
    pub min_seed_distance: i32,
    pub policy: SeedPolicy,
}

impl Default for SeedingParams {
    fn default() -> Self {
        Self {
            district_count: 20,
            min_seed_distance: 3,
            policy: SeedPolicy::Random,
        }
    }
}

/// Comparison used when rolling the growth probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrowthComparison {
    /// Grow when `roll < probability`.
    #[default]
    Strict,
    /// Grow when `roll <= probability`.
    Inclusive,
}

impl GrowthComparison {
    pub fn passes(self, roll: f32, probability: f32) -> bool {
        match self {
            GrowthComparison::Strict => roll < probability,
            GrowthComparison::Inclusive => roll <= probability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthParams {
    pub growth_probability: f32,
    pub comparison: GrowthComparison,
    /// Growth stops once the grid has been unchanged for more than this many
    /// consecutive iterations.
    pub stagnation_limit: u32,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            growth_probability: 0.5,
            comparison: GrowthComparison::Strict,
            stagnation_limit: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadParams {
    /// Extra widening passes applied to the road network (0 = single width).
    pub additional_road_width: u32,
    /// Return road cells that border only one district back to that district.
    pub trim_dead_roads: bool,
    /// Largest Moore radius searched when building the road-access layer.
    pub access_max_radius: i32,
}

impl Default for RoadParams {
    fn default() -> Self {
        Self {
            additional_road_width: 0,
            trim_dead_roads: false,
            access_max_radius: 5,
        }
    }
}

// ---------------------------------------------------------------------------
// Lots
// ---------------------------------------------------------------------------

/// Allowed lot dimensions for one zoning type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotBand {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl LotBand {
    pub const fn new(min_x: usize, min_y: usize, max_x: usize, max_y: usize) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn can_split_x(&self, width: usize) -> bool {
        width > self.max_x && width >= 2 * self.min_x
    }

    pub fn can_split_y(&self, height: usize) -> bool {
        height > self.max_y && height >= 2 * self.min_y
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotParams {
    pub unzoned: LotBand,
    pub residential: LotBand,
    pub commercial: LotBand,
    pub industrial: LotBand,
}

impl Default for LotParams {
    fn default() -> Self {
        Self {
            unzoned: LotBand::new(2, 2, 10, 10),
            residential: LotBand::new(2, 2, 5, 5),
            commercial: LotBand::new(3, 3, 8, 8),
            industrial: LotBand::new(4, 4, 12, 12),
        }
    }
}

impl LotParams {
    pub fn band_for(&self, zoning: Zoning) -> LotBand {
        match zoning {
            Zoning::Empty => self.unzoned,
            Zoning::Residential => self.residential,
            Zoning::Commercial => self.commercial,
            Zoning::Industrial => self.industrial,
        }
    }
}

// ---------------------------------------------------------------------------
// Layers
// ---------------------------------------------------------------------------

/// Delta, spread radius and footprint of one building type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectParams {
    pub delta: i32,
    pub radius: i32,
    pub footprint_width: i32,
    pub footprint_height: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingEffectParams {
    pub water_tower: EffectParams,
    pub electricity_tower: EffectParams,
    pub school: EffectParams,
    pub park: EffectParams,
    pub police_station: EffectParams,
}

impl Default for BuildingEffectParams {
    fn default() -> Self {
        Self {
            water_tower: EffectParams {
                delta: 50,
                radius: 3,
                footprint_width: 1,
                footprint_height: 1,
            },
            electricity_tower: EffectParams {
                delta: 50,
                radius: 4,
                footprint_width: 1,
                footprint_height: 1,
            },
            school: EffectParams {
                delta: 30,
                radius: 2,
                footprint_width: 6,
                footprint_height: 4,
            },
            park: EffectParams {
                delta: -50,
                radius: 2,
                footprint_width: 4,
                footprint_height: 3,
            },
            police_station: EffectParams {
                delta: 50,
                radius: 3,
                footprint_width: 4,
                footprint_height: 3,
            },
        }
    }
}

impl BuildingEffectParams {
    pub fn for_kind(&self, kind: BuildingKind) -> EffectParams {
        match kind {
            BuildingKind::WaterTower => self.water_tower,
            BuildingKind::ElectricityTower => self.electricity_tower,
            BuildingKind::School => self.school,
            BuildingKind::Park => self.park,
            BuildingKind::PoliceStation => self.police_station,
        }
    }
}

/// Starting value of each simulated layer before any effect is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerBaselines {
    pub water: i32,
    pub electricity: i32,
    pub satisfaction: i32,
    pub pollution: i32,
    pub density: i32,
    pub security: i32,
}

impl Default for LayerBaselines {
    fn default() -> Self {
        Self {
            water: 0,
            electricity: 10,
            satisfaction: 10,
            pollution: 10,
            density: 0,
            security: 10,
        }
    }
}

/// Random water sources dropped onto the water layer at initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterSeedParams {
    pub count: usize,
    pub min_distance: i32,
}

impl Default for WaterSeedParams {
    fn default() -> Self {
        Self {
            count: 5,
            min_distance: 10,
        }
    }
}

/// A building effect applied once the layers are initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingPlacement {
    pub kind: BuildingKind,
    pub x: i32,
    pub y: i32,
}

// ---------------------------------------------------------------------------
// Zoning
// ---------------------------------------------------------------------------

/// Per-layer sufficiency thresholds, in percent of the layer maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoningThresholds {
    pub water: f32,
    pub electricity: f32,
    pub satisfaction: f32,
    /// Pollution is sufficient when the district average is *below* this.
    pub pollution: f32,
    pub density: f32,
    pub road_access: f32,
    pub security: f32,
}

impl Default for ZoningThresholds {
    fn default() -> Self {
        Self {
            water: 20.0,
            electricity: 10.0,
            satisfaction: 10.0,
            pollution: 50.0,
            density: 0.0,
            road_access: 30.0,
            security: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    /// Zoning follows the layer thresholds.
    #[default]
    LayerDriven,
    /// Zoning is drawn from the relative weights only.
    Weighted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoningWeights {
    pub residential: f32,
    pub commercial: f32,
    pub industrial: f32,
}

impl Default for ZoningWeights {
    fn default() -> Self {
        Self {
            residential: 0.5,
            commercial: 0.3,
            industrial: 0.2,
        }
    }
}

// ---------------------------------------------------------------------------
// CityGenConfig resource
// ---------------------------------------------------------------------------

/// Every tunable of a generation run.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityGenConfig {
    pub grid_size: usize,
    pub rng_seed: u64,
    pub seeding: SeedingParams,
    pub growth: GrowthParams,
    pub roads: RoadParams,
    pub lots: LotParams,
    pub effects: BuildingEffectParams,
    pub baselines: LayerBaselines,
    pub water_seeds: WaterSeedParams,
    pub buildings: Vec<BuildingPlacement>,
    pub thresholds: ZoningThresholds,
    pub classification: ClassificationMode,
    pub weights: ZoningWeights,
}

impl Default for CityGenConfig {
    fn default() -> Self {
        Self {
            grid_size: 100,
            rng_seed: 42,
            seeding: SeedingParams::default(),
            growth: GrowthParams::default(),
            roads: RoadParams::default(),
            lots: LotParams::default(),
            effects: BuildingEffectParams::default(),
            baselines: LayerBaselines::default(),
            water_seeds: WaterSeedParams::default(),
            buildings: Vec::new(),
            thresholds: ZoningThresholds::default(),
            classification: ClassificationMode::LayerDriven,
            weights: ZoningWeights::default(),
        }
    }
}

impl CityGenConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, CityGenError> {
        let config: CityGenConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, CityGenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), CityGenError> {
        if self.grid_size == 0 {
            return Err(CityGenError::InvalidConfig(
                "grid_size must be greater than zero".to_string(),
            ));
        }
        let cells = self
            .grid_size
            .checked_mul(self.grid_size)
            .and_then(|n| i32::try_from(n).ok());
        if cells.is_none() {
            return Err(CityGenError::InvalidConfig(format!(
                "grid_size {} is too large",
                self.grid_size
            )));
        }
        if !(0.0..=1.0).contains(&self.growth.growth_probability) {
            return Err(CityGenError::InvalidConfig(format!(
                "growth_probability {} is outside [0, 1]",
                self.growth.growth_probability
            )));
        }
        if self.roads.access_max_radius < 0 {
            return Err(CityGenError::InvalidConfig(
                "access_max_radius must not be negative".to_string(),
            ));
        }
        if self.roads.access_max_radius as usize > self.grid_size {
            return Err(CityGenError::InvalidConfig(format!(
                "access_max_radius {} exceeds grid_size",
                self.roads.access_max_radius
            )));
        }
        for kind in BuildingKind::ALL {
            let effect = self.effects.for_kind(kind);
            if !(-LAYER_MAX..=LAYER_MAX).contains(&effect.delta) {
                return Err(CityGenError::InvalidConfig(format!(
                    "{kind:?} delta {} is outside [-{LAYER_MAX}, {LAYER_MAX}]",
                    effect.delta
                )));
            }
            if effect.radius < 0 || effect.radius as usize > self.grid_size {
                return Err(CityGenError::InvalidConfig(format!(
                    "{kind:?} radius {} is outside [0, grid_size]",
                    effect.radius
                )));
            }
        }
        for (name, band) in [
            ("unzoned", self.lots.unzoned),
            ("residential", self.lots.residential),
            ("commercial", self.lots.commercial),
            ("industrial", self.lots.industrial),
        ] {
            if band.min_x == 0 || band.min_y == 0 {
                return Err(CityGenError::InvalidConfig(format!(
                    "{name} lot band minimum must be at least 1"
                )));
            }
            if band.min_x > band.max_x || band.min_y > band.max_y {
                return Err(CityGenError::InvalidConfig(format!(
                    "{name} lot band minimum exceeds maximum"
                )));
            }
        }
        let weights = [
            self.weights.residential,
            self.weights.commercial,
            self.weights.industrial,
        ];
        if weights.iter().any(|w| *w < 0.0 || !w.is_finite()) {
            return Err(CityGenError::InvalidConfig(
                "zoning weights must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(CityGenConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CityGenConfig::from_json_str(
            r#"{ "grid_size": 32, "seeding": { "district_count": 4 } }"#,
        )
        .unwrap();
        assert_eq!(config.grid_size, 32);
        assert_eq!(config.seeding.district_count, 4);
        assert_eq!(config.seeding.min_seed_distance, 3);
        assert_eq!(config.growth, GrowthParams::default());
    }

    #[test]
    fn test_enum_fields_use_snake_case() {
        let config = CityGenConfig::from_json_str(
            r#"{ "seeding": { "policy": "organized" }, "classification": "weighted",
                 "growth": { "comparison": "inclusive" } }"#,
        )
        .unwrap();
        assert_eq!(config.seeding.policy, SeedPolicy::Organized);
        assert_eq!(config.classification, ClassificationMode::Weighted);
        assert_eq!(config.growth.comparison, GrowthComparison::Inclusive);
    }

    #[test]
    fn test_buildings_deserialize() {
        let config = CityGenConfig::from_json_str(
            r#"{ "buildings": [ { "kind": "water_tower", "x": 3, "y": 4 } ] }"#,
        )
        .unwrap();
        assert_eq!(
            config.buildings,
            vec![BuildingPlacement {
                kind: BuildingKind::WaterTower,
                x: 3,
                y: 4
            }]
        );
    }

    #[test]
    fn test_zero_grid_rejected() {
        let err = CityGenConfig::from_json_str(r#"{ "grid_size": 0 }"#).unwrap_err();
        assert!(matches!(err, CityGenError::InvalidConfig(_)));
    }

    #[test]
    fn test_oversized_grid_rejected_without_overflow() {
        for json in [
            r#"{ "grid_size": 5000000000 }"#,
            r#"{ "grid_size": 50000 }"#,
        ] {
            let err = CityGenConfig::from_json_str(json).unwrap_err();
            assert!(format!("{err}").contains("too large"), "got: {err}");
        }
    }

    #[test]
    fn test_effect_delta_bounded_by_layer_max() {
        let mut config = CityGenConfig::default();
        config.effects.electricity_tower.delta = i32::MAX - 1;
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("ElectricityTower"), "got: {err}");

        config.effects.electricity_tower.delta = -LAYER_MAX;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_or_huge_radius_rejected() {
        let mut config = CityGenConfig::default();
        config.effects.park.radius = -1;
        assert!(config.validate().is_err());
        config.effects.park.radius = i32::MAX;
        assert!(config.validate().is_err());

        let mut config = CityGenConfig::default();
        config.roads.access_max_radius = i32::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_probability_rejected() {
        let mut config = CityGenConfig::default();
        config.growth.growth_probability = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_lot_band_rejected() {
        let mut config = CityGenConfig::default();
        config.lots.commercial = LotBand::new(6, 3, 4, 8);
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("commercial"), "got: {err}");
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = CityGenConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CityGenError::Json(_)));
    }

    #[test]
    fn test_growth_comparison_boundary() {
        assert!(!GrowthComparison::Strict.passes(0.5, 0.5));
        assert!(GrowthComparison::Inclusive.passes(0.5, 0.5));
        assert!(GrowthComparison::Strict.passes(0.49, 0.5));
    }

    #[test]
    fn test_lot_band_split_boundary() {
        let band = LotBand::new(2, 2, 10, 10);
        assert!(!band.can_split_x(10));
        assert!(band.can_split_x(11));
        let tight = LotBand::new(3, 3, 3, 3);
        assert!(!tight.can_split_y(5));
        assert!(tight.can_split_y(6));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = CityGenConfig::default();
        let json = config.to_json_pretty().unwrap();
        let back = CityGenConfig::from_json_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
