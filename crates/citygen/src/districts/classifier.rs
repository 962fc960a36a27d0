use bevy::prelude::*;

use crate::config::{CityGenConfig, ClassificationMode, ZoningThresholds, ZoningWeights};
use crate::layers::{CityLayers, LayerKind};
use crate::sim_rng::SimRng;

use super::types::{District, LayerFractions, Sufficiency, Zoning};

/// Sum of each layer over `cells` divided by `cells.len() * 100`. All zero
/// for an empty cell list.
pub fn district_fractions(cells: &[usize], layers: &CityLayers) -> LayerFractions {
    let mut fractions = LayerFractions::default();
    if cells.is_empty() {
        return fractions;
    }
    let max = cells.len() as f64 * 100.0;
    for kind in LayerKind::ALL {
        let sum = layers.get(kind).sum_over(cells) as f64;
        fractions.set(kind, (sum / max).clamp(0.0, 1.0) as f32);
    }
    fractions
}

pub fn sufficiency(fractions: &LayerFractions, thresholds: &ZoningThresholds) -> Sufficiency {
    let at_least = |value: f32, percent: f32| value * 100.0 >= percent;
    Sufficiency {
        water: at_least(fractions.water, thresholds.water),
        electricity: at_least(fractions.electricity, thresholds.electricity),
        satisfaction: at_least(fractions.satisfaction, thresholds.satisfaction),
        low_pollution: fractions.pollution * 100.0 < thresholds.pollution,
        density: at_least(fractions.density, thresholds.density),
        road_access: at_least(fractions.road_access, thresholds.road_access),
        security: at_least(fractions.security, thresholds.security),
    }
}

/// Qualifying zonings in residential, commercial, industrial order.
pub fn available_zonings(s: &Sufficiency) -> Vec<Zoning> {
    let mut out = Vec::with_capacity(3);
    if s.residential() {
        out.push(Zoning::Residential);
    }
    if s.commercial() {
        out.push(Zoning::Commercial);
    }
    if s.industrial() {
        out.push(Zoning::Industrial);
    }
    out
}

/// Draws a zoning in proportion to the configured weights. All-zero
/// weights give `Zoning::Empty`.
pub fn pick_weighted(weights: &ZoningWeights, rng: &mut SimRng) -> Zoning {
    let table = [
        (Zoning::Residential, weights.residential.max(0.0)),
        (Zoning::Commercial, weights.commercial.max(0.0)),
        (Zoning::Industrial, weights.industrial.max(0.0)),
    ];
    let total: f32 = table.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return Zoning::Empty;
    }
    let roll = rng.frand() * total;
    let mut acc = 0.0;
    for (zoning, w) in table {
        acc += w;
        if roll < acc {
            return zoning;
        }
    }
    // Rounding can leave the roll at the very top of the range.
    table
        .iter()
        .rev()
        .find(|(_, w)| *w > 0.0)
        .map(|(z, _)| *z)
        .unwrap_or(Zoning::Empty)
}

/// Computes fractions for one district and assigns its zoning.
pub fn classify_district(
    district: &mut District,
    layers: &CityLayers,
    config: &CityGenConfig,
    rng: &mut SimRng,
) {
    district.fractions = district_fractions(&district.cells, layers);
    match config.classification {
        ClassificationMode::LayerDriven => {
            let s = sufficiency(&district.fractions, &config.thresholds);
            district.available = available_zonings(&s);
            district.zoning = rng
                .pick(&district.available)
                .copied()
                .unwrap_or(Zoning::Empty);
        }
        ClassificationMode::Weighted => {
            district.available.clear();
            district.zoning = pick_weighted(&config.weights, rng);
        }
    }
}

pub fn classify_districts(
    districts: &mut [District],
    layers: &CityLayers,
    config: &CityGenConfig,
    rng: &mut SimRng,
) {
    for district in districts.iter_mut() {
        classify_district(district, layers, config, rng);
    }
    let unzoned = districts
        .iter()
        .filter(|d| d.zoning == Zoning::Empty)
        .count();
    info!(
        "Classified {} districts ({} left unzoned)",
        districts.len(),
        unzoned
    );
}
