//! Procedural city layout generation on a square cell grid.
//!
//! The pipeline runs in a fixed order: seed placement, district growth, road
//! injection, patching, junction marking, layer simulation, district zoning,
//! BSP lot partitioning and largest-rectangle refinement. Everything is owned
//! by [`CityLayoutState`]; the Bevy plugin in [`plugin`] is a thin adapter.

pub mod ascii_map;
pub mod config;
pub mod districts;
pub mod error;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod growth;
pub mod layers;
pub mod lots;
pub mod pipeline;
pub mod plugin;
pub mod road_network;
pub mod seeding;
pub mod sim_rng;
pub mod state_hash;
pub mod terrain_mask;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use config::CityGenConfig;
pub use error::CityGenError;
pub use grid::{Cell, CityGrid, DistrictId};
pub use pipeline::{CityLayoutState, PipelineReport};
pub use plugin::{CityGenPlugin, RegenerateCity};
pub use sim_rng::SimRng;
