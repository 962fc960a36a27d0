//! Per-cell urban attribute layers and the stages that produce them.

mod accessibility;
mod derived;
mod effects;
mod init;
mod road_tiles;
mod types;
mod vegetation;

pub use accessibility::{access_value, compute_road_access};
pub use derived::{building_layer, road_layer, zoning_layer, DerivedLayers};
pub use effects::{apply_building_effect, effect_footprint};
pub use init::{initialize_layers, LayerInit};
pub use road_tiles::{district_mask, road_tile, road_tiles, RoadTile};
pub use types::{BuildingKind, CityLayers, LayerGrid, LayerKind, SpreadShape};
pub use vegetation::{vegetation_layer, Foliage};
