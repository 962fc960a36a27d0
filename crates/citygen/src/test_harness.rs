//! # TestLayout: headless harness for layout generation tests
//!
//! Wraps a `bevy::app::App` running `CityGenPlugin` under `MinimalPlugins`.
//! Builder methods adjust the `CityGenConfig` resource before the first
//! update; `generate()` runs Startup and returns the harness for queries and
//! assertions.

use bevy::app::App;
use bevy::prelude::*;

use crate::ascii_map::{parse_grid, render_grid};
use crate::config::{BuildingPlacement, CityGenConfig, SeedPolicy};
use crate::districts::District;
use crate::grid::{Cell, CityGrid};
use crate::layers::BuildingKind;
use crate::pipeline::{CityLayoutState, PipelineReport};
use crate::plugin::{CityGenPlugin, RegenerateCity};
use crate::state_hash::LayoutHash;

/// Parses an ASCII fixture, panicking with the parse error on bad input.
pub fn grid_from_ascii(text: &str) -> CityGrid {
    parse_grid(text).unwrap_or_else(|e| panic!("Bad ASCII fixture: {e}\n{text}"))
}

/// A headless Bevy App wrapping `CityGenPlugin` for integration testing.
pub struct TestLayout {
    app: App,
    generated: bool,
}

impl Default for TestLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLayout {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A 32x32 layout with 6 random districts and 3 water sources.
    pub fn new() -> Self {
        let mut config = CityGenConfig {
            grid_size: 32,
            ..CityGenConfig::default()
        };
        config.seeding.district_count = 6;
        config.seeding.min_seed_distance = 6;
        config.water_seeds.count = 3;
        config.water_seeds.min_distance = 8;
        Self::with_config(config)
    }

    pub fn with_config(config: CityGenConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(config);
        app.add_plugins(CityGenPlugin);
        Self {
            app,
            generated: false,
        }
    }

    // -----------------------------------------------------------------------
    // Configuration (builder pattern, consumes and returns Self)
    // -----------------------------------------------------------------------

    fn config_mut(&mut self) -> Mut<'_, CityGenConfig> {
        self.app.world_mut().resource_mut::<CityGenConfig>()
    }

    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.config_mut().grid_size = size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config_mut().rng_seed = seed;
        self
    }

    pub fn with_districts(mut self, count: usize, min_distance: i32) -> Self {
        {
            let mut config = self.config_mut();
            config.seeding.district_count = count;
            config.seeding.min_seed_distance = min_distance;
        }
        self
    }

    pub fn with_policy(mut self, policy: SeedPolicy) -> Self {
        self.config_mut().seeding.policy = policy;
        self
    }

    pub fn with_water_sources(mut self, count: usize, min_distance: i32) -> Self {
        {
            let mut config = self.config_mut();
            config.water_seeds.count = count;
            config.water_seeds.min_distance = min_distance;
        }
        self
    }

    pub fn with_building(mut self, kind: BuildingKind, x: i32, y: i32) -> Self {
        self.config_mut()
            .buildings
            .push(BuildingPlacement { kind, x, y });
        self
    }

    pub fn with_road_width(mut self, extra: u32) -> Self {
        self.config_mut().roads.additional_road_width = extra;
        self
    }

    /// Runs the first update, which generates the layout.
    pub fn generate(mut self) -> Self {
        self.app.update();
        self.generated = true;
        self
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    pub fn regenerate(&mut self, seed: Option<u64>) {
        if !self.generated {
            self.app.update();
            self.generated = true;
        }
        self.app.world_mut().send_event(RegenerateCity { seed });
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn state(&self) -> &CityLayoutState {
        self.resource::<CityLayoutState>()
    }

    pub fn grid(&self) -> &CityGrid {
        &self.state().grid
    }

    pub fn report(&self) -> PipelineReport {
        self.state().report
    }

    pub fn districts(&self) -> &[District] {
        &self.state().districts
    }

    pub fn hash(&self) -> u64 {
        self.resource::<LayoutHash>().hash
    }

    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.grid().get(x, y)
    }

    pub fn ascii(&self) -> String {
        render_grid(self.grid())
    }

    pub fn road_cell_count(&self) -> usize {
        self.grid().count(|c| c.is_road())
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_no_empty_cells(&self) {
        let empty = self.grid().empty_count();
        assert_eq!(empty, 0, "Expected a full grid, {empty} empty:\n{}", self.ascii());
    }

    /// Every junction touches more than two districts; every plain road
    /// touches at most two.
    pub fn assert_junction_property(&self) {
        let grid = self.grid();
        let size = grid.size as i32;
        for y in 0..size {
            for x in 0..size {
                let cell = grid.get(x, y);
                let touching = grid.moore_districts(x, y).len();
                if cell.is_junction() {
                    assert!(touching > 2, "Junction at ({x}, {y}) touches {touching}");
                } else if cell == Cell::Road {
                    assert!(touching <= 2, "Road at ({x}, {y}) touches {touching}");
                }
            }
        }
    }

    pub fn assert_lots_have_road_access(&self) {
        let state = self.state();
        for district in &state.districts {
            for lot in &district.lots {
                assert!(
                    lot.cells
                        .iter()
                        .any(|&i| state.layers.road_access.get(i) > 0),
                    "Lot {} of district {} has no road access",
                    lot.id,
                    district.id.0
                );
            }
        }
    }

    pub fn assert_fractions_in_unit_range(&self) {
        for district in self.districts() {
            for kind in crate::layers::LayerKind::ALL {
                let f = district.fractions.get(kind);
                assert!(
                    (0.0..=1.0).contains(&f),
                    "District {} {} fraction {f} outside [0, 1]",
                    district.id.0,
                    kind.name()
                );
            }
        }
    }

    pub fn assert_resource_exists<T: Resource>(&self) {
        assert!(
            self.app.world().get_resource::<T>().is_some(),
            "Expected resource {} to exist",
            std::any::type_name::<T>()
        );
    }
}
