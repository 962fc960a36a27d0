use bevy::prelude::*;

use crate::config::CityGenConfig;
use crate::grid::CityGrid;
use crate::seeding::{sample_spaced_points, SeedReport};
use crate::sim_rng::SimRng;

use super::accessibility::compute_road_access;
use super::effects::apply_building_effect;
use super::types::{BuildingKind, CityLayers, LayerGrid};

/// Freshly initialized layers plus the water sources that were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerInit {
    pub layers: CityLayers,
    pub water_sources: SeedReport,
}

/// Builds every simulated layer for a finished grid.
///
/// Baselines come first, then the random water sources (each acting as a
/// water tower), then road access, then the configured buildings in order.
pub fn initialize_layers(
    grid: &CityGrid,
    config: &CityGenConfig,
    rng: &mut SimRng,
) -> LayerInit {
    let size = grid.size;
    let base = &config.baselines;
    let mut layers = CityLayers {
        water: LayerGrid::new(size, base.water),
        electricity: LayerGrid::new(size, base.electricity),
        satisfaction: LayerGrid::new(size, base.satisfaction),
        pollution: LayerGrid::new(size, base.pollution),
        density: LayerGrid::new(size, base.density),
        road_access: LayerGrid::new(size, 0),
        security: LayerGrid::new(size, base.security),
    };

    let water_sources = sample_spaced_points(
        rng,
        size,
        config.water_seeds.count,
        config.water_seeds.min_distance,
    );
    for source in &water_sources.seeds {
        // Sampled points are always in bounds.
        let _ = apply_building_effect(
            &mut layers,
            &config.effects,
            BuildingKind::WaterTower,
            source.x,
            source.y,
        );
    }
    if water_sources.is_short() {
        warn!(
            "Placed {} of {} water sources",
            water_sources.placed(),
            water_sources.requested
        );
    }

    layers.road_access = compute_road_access(grid, config.roads.access_max_radius);

    for placement in &config.buildings {
        if let Err(e) = apply_building_effect(
            &mut layers,
            &config.effects,
            placement.kind,
            placement.x,
            placement.y,
        ) {
            warn!("Skipping {:?}: {e}", placement.kind);
        }
    }

    LayerInit {
        layers,
        water_sources,
    }
}
