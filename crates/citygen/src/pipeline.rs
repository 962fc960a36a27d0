//! The generation driver: runs every stage in order and owns the results.
//!
//! Stage order is fixed: seed, grow, road injection, patching, optional
//! dead-road trimming, widening, junction marking, road tracing, layer
//! initialization, district classification, lot subdivision and the derived
//! presentation layers. Each stage is a plain function over the grid; this
//! module only sequences them and records what happened in a
//! [`PipelineReport`].

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ascii_map::render_grid;
use crate::config::CityGenConfig;
use crate::districts::{classify_districts, collect_districts, District};
use crate::error::CityGenError;
use crate::export::grid_to_json;
use crate::grid::CityGrid;
use crate::growth::{
    add_roads, mark_junctions, patch_empty_cells, simulate, trim_dead_roads, widen_roads,
};
use crate::layers::{
    building_layer, initialize_layers, road_layer, road_tiles, vegetation_layer, zoning_layer,
    BuildingKind, CityLayers, DerivedLayers, LayerGrid, LayerKind, RoadTile,
};
use crate::lots::subdivide_districts;
use crate::road_network::{build_road_network, RoadSegment};
use crate::seeding::{place_seeds, SeedReport};
use crate::sim_rng::SimRng;

/// Counters describing one generation run, including degraded outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub seeds_requested: usize,
    pub seeds_placed: usize,
    pub water_sources_requested: usize,
    pub water_sources_placed: usize,
    pub growth_iterations: u32,
    pub growth_stagnated: bool,
    /// Empty cells left once patching finished.
    pub empty_remaining: usize,
    pub roads_added: usize,
    pub cells_patched: usize,
    pub roads_trimmed: usize,
    pub roads_widened: usize,
    pub junctions: usize,
    pub road_segments: usize,
    pub districts: usize,
    pub lots: usize,
    pub lots_discarded: usize,
    pub lots_rectangular: usize,
    pub lots_irregular: usize,
}

impl PipelineReport {
    /// True when any stage produced less than was asked of it.
    pub fn is_degraded(&self) -> bool {
        self.seeds_placed < self.seeds_requested
            || self.water_sources_placed < self.water_sources_requested
            || self.growth_stagnated
            || self.empty_remaining > 0
    }
}

/// Everything one generation run produced.
#[derive(Resource, Debug, Clone)]
pub struct CityLayoutState {
    pub config: CityGenConfig,
    pub grid: CityGrid,
    pub seeds: SeedReport,
    pub layers: CityLayers,
    pub derived: DerivedLayers,
    pub road_tiles: Vec<Option<RoadTile>>,
    pub districts: Vec<District>,
    pub roads: Vec<RoadSegment>,
    pub report: PipelineReport,
}

impl CityLayoutState {
    pub fn generate(config: &CityGenConfig, rng: &mut SimRng) -> Result<Self, CityGenError> {
        config.validate()?;
        let size = config.grid_size;
        let mut report = PipelineReport::default();

        let mut grid = CityGrid::new(size);
        let seeds = place_seeds(&mut grid, rng, &config.seeding);
        report.seeds_requested = seeds.requested;
        report.seeds_placed = seeds.placed();

        let growth = simulate(&mut grid, rng, &config.growth);
        report.growth_iterations = growth.iterations;
        report.growth_stagnated = growth.stagnated;

        report.roads_added = add_roads(&mut grid);
        report.cells_patched = patch_empty_cells(&mut grid);
        if config.roads.trim_dead_roads {
            report.roads_trimmed = trim_dead_roads(&mut grid);
        }
        report.roads_widened = widen_roads(&mut grid, config.roads.additional_road_width);
        report.junctions = mark_junctions(&mut grid);
        report.empty_remaining = grid.empty_count();
        debug!(
            "Road passes: {} injected, {} patched, {} trimmed, {} widened, {} junctions",
            report.roads_added,
            report.cells_patched,
            report.roads_trimmed,
            report.roads_widened,
            report.junctions
        );

        let roads = build_road_network(&grid);
        report.road_segments = roads.len();

        let init = initialize_layers(&grid, config, rng);
        report.water_sources_requested = init.water_sources.requested;
        report.water_sources_placed = init.water_sources.placed();

        let mut state = Self {
            config: config.clone(),
            derived: DerivedLayers {
                road: road_layer(&grid),
                zoning: LayerGrid::new(size, -1),
                building: LayerGrid::new(size, -1),
                vegetation: LayerGrid::new(size, 0),
            },
            road_tiles: road_tiles(&grid),
            districts: collect_districts(&grid),
            grid,
            seeds,
            layers: init.layers,
            roads,
            report,
        };
        state.report.districts = state.districts.len();
        state.rezone(rng);

        info!(
            "Generated {}x{} layout: {} districts, {} road segments, {} lots",
            size,
            size,
            state.report.districts,
            state.report.road_segments,
            state.report.lots
        );
        if state.report.empty_remaining > 0 {
            warn!(
                "{} cells remain empty after patching",
                state.report.empty_remaining
            );
        }
        Ok(state)
    }

    /// Reclassifies every district from the current layers, subdivides them
    /// again and refreshes the zoning-dependent layers.
    pub fn rezone(&mut self, rng: &mut SimRng) {
        let size = self.grid.size;
        classify_districts(&mut self.districts, &self.layers, &self.config, rng);
        let lots = subdivide_districts(
            &mut self.districts,
            &self.grid,
            &self.layers.road_access,
            &self.config.lots,
            rng,
        );
        self.report.lots = lots.lots;
        self.report.lots_discarded = lots.discarded;
        self.report.lots_rectangular = lots.rectangular;
        self.report.lots_irregular = lots.irregular;

        self.derived.zoning = zoning_layer(size, &self.districts);
        self.derived.building = building_layer(size, &self.districts);
        self.derived.vegetation = vegetation_layer(size, &self.districts, rng);
    }

    /// Places one more building on the existing layers. Zoning is not
    /// recomputed until [`CityLayoutState::rezone`] runs.
    pub fn apply_building_effect(
        &mut self,
        kind: BuildingKind,
        x: i32,
        y: i32,
    ) -> Result<usize, CityGenError> {
        crate::layers::apply_building_effect(&mut self.layers, &self.config.effects, kind, x, y)
    }

    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// The raw district grid as a transport document.
    pub fn grid_json(&self) -> Result<String, CityGenError> {
        grid_to_json(&self.grid.to_raw(), self.grid.size)
    }

    pub fn layer_json(&self, kind: LayerKind) -> Result<String, CityGenError> {
        grid_to_json(&self.layers.get(kind).values, self.grid.size)
    }

    pub fn ascii(&self) -> String {
        render_grid(&self.grid)
    }

    pub fn district(&self, id: u32) -> Option<&District> {
        self.districts.iter().find(|d| d.id.0 == id)
    }

    pub fn lot_count(&self) -> usize {
        self.districts.iter().map(|d| d.lots.len()).sum()
    }
}
