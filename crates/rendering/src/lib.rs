//! Stateless visual mapping for generated city layouts.

use bevy::prelude::*;

pub mod color_ramps;
pub mod layout_renderer;
pub mod palette;

pub use layout_renderer::{
    lot_footprints, road_mesh_variant, CellVisual, LayoutRenderer, LotFootprint, RenderMode,
};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LayoutRenderer>();
    }
}
