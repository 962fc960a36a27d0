//! Read-only mapping from a generated layout to per-cell visual attributes.
//!
//! The renderer holds no layout state of its own. Every query takes a
//! `&CityLayoutState` snapshot and returns plain values an instanced mesh
//! (or any other backend) can consume directly.

use bevy::prelude::*;

use citygen::districts::Zoning;
use citygen::grid::Cell;
use citygen::layers::LayerKind;
use citygen::lots::Facing;
use citygen::CityLayoutState;

use crate::color_ramps::{layer_tint, value_alpha, ACCESS_RAMP, DENSITY_RAMP};
use crate::palette::{district_color, zoning_color, EMPTY_COLOR, JUNCTION_COLOR, ROAD_COLOR};

/// Which view of the layout to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Districts,
    Zoning,
    Roads,
    Buildings,
    Vegetation,
    Layer(LayerKind),
    /// Continuous ramp instead of tint-and-alpha, for density and access.
    Heatmap(LayerKind),
}

/// Visual attributes of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellVisual {
    pub color: Color,
    pub alpha: f32,
    /// 0.5 for cells carrying information in the current mode, 0 otherwise.
    pub emphasis: f32,
}

impl CellVisual {
    const HIGHLIGHT: f32 = 0.5;

    fn shown(color: Color, alpha: f32) -> Self {
        Self {
            color,
            alpha,
            emphasis: Self::HIGHLIGHT,
        }
    }

    fn background() -> Self {
        Self {
            color: EMPTY_COLOR,
            alpha: 1.0,
            emphasis: 0.0,
        }
    }

    /// Instance custom data in slot order: r, g, b, alpha, emphasis.
    pub fn custom_data(&self) -> [f32; 5] {
        let c = self.color.to_srgba();
        [c.red, c.green, c.blue, self.alpha, self.emphasis]
    }
}

/// Placement data for a building on one lot.
#[derive(Debug, Clone, PartialEq)]
pub struct LotFootprint {
    pub district: u32,
    pub lot: u32,
    pub zoning: Zoning,
    /// World-space centre of the lot's bounding box.
    pub center: Vec2,
    pub width: usize,
    pub height: usize,
    pub facing: Facing,
}

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LayoutRenderer {
    pub mode: RenderMode,
}

impl LayoutRenderer {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    pub fn cell_visual(&self, state: &CityLayoutState, idx: usize) -> CellVisual {
        let cell = state.grid.cells.get(idx).copied().unwrap_or_default();
        match self.mode {
            RenderMode::Districts => match cell {
                Cell::District(id) => CellVisual::shown(district_color(id.0), 1.0),
                Cell::Road => CellVisual::shown(ROAD_COLOR, 1.0),
                Cell::Junction => CellVisual::shown(JUNCTION_COLOR, 1.0),
                Cell::Empty => CellVisual::background(),
            },
            RenderMode::Zoning => {
                if cell.is_road() {
                    return CellVisual::shown(ROAD_COLOR, 1.0);
                }
                let code = state.derived.zoning.values.get(idx).copied().unwrap_or(-1);
                match Zoning::from_code(code) {
                    Zoning::Empty => CellVisual::background(),
                    zoning => CellVisual::shown(zoning_color(zoning), 1.0),
                }
            }
            RenderMode::Roads => {
                if cell.is_road() {
                    CellVisual::shown(ROAD_COLOR, 1.0)
                } else {
                    CellVisual::background()
                }
            }
            RenderMode::Buildings => {
                let code = state.derived.building.values.get(idx).copied().unwrap_or(-1);
                if code < 0 {
                    CellVisual::background()
                } else {
                    CellVisual::shown(zoning_color(Zoning::from_code(code)), 1.0)
                }
            }
            RenderMode::Vegetation => {
                let variant = state.derived.vegetation.values.get(idx).copied().unwrap_or(0);
                if variant > 0 {
                    // Trees darker than grass and bushes.
                    let lightness = if variant <= 3 { 0.25 } else { 0.45 };
                    CellVisual::shown(Color::hsl(110.0, 0.55, lightness), 1.0)
                } else {
                    CellVisual::background()
                }
            }
            RenderMode::Layer(kind) => {
                let value = state.layers.get(kind).values.get(idx).copied().unwrap_or(0);
                if value > 0 {
                    CellVisual::shown(layer_tint(kind), value_alpha(value))
                } else {
                    CellVisual::background()
                }
            }
            RenderMode::Heatmap(kind) => {
                let value = state.layers.get(kind).values.get(idx).copied().unwrap_or(0);
                let color = match kind {
                    LayerKind::Density => DENSITY_RAMP.sample_value(value),
                    _ => ACCESS_RAMP.sample_value(value),
                };
                CellVisual::shown(color, 1.0)
            }
        }
    }

    /// One visual per cell, row-major.
    pub fn visuals(&self, state: &CityLayoutState) -> Vec<CellVisual> {
        (0..state.grid.cells.len())
            .map(|idx| self.cell_visual(state, idx))
            .collect()
    }
}

/// Mesh variant id for the road tile at `idx`, or `None` off-road.
pub fn road_mesh_variant(state: &CityLayoutState, idx: usize) -> Option<i32> {
    state.road_tiles.get(idx).copied().flatten().map(|t| t.id())
}

/// Building placement for every lot, in district then lot order.
pub fn lot_footprints(state: &CityLayoutState) -> Vec<LotFootprint> {
    let geo = state.grid.geometry();
    let mut out = Vec::new();
    for district in &state.districts {
        for lot in &district.lots {
            if lot.cells.is_empty() {
                continue;
            }
            let (mut min, mut max) = (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN));
            for &idx in &lot.cells {
                let c = geo.cell_center(idx);
                min = min.min(c);
                max = max.max(c);
            }
            out.push(LotFootprint {
                district: district.id.0,
                lot: lot.id,
                zoning: district.zoning,
                center: (min + max) * 0.5,
                width: lot.width,
                height: lot.height,
                facing: lot.facing,
            });
        }
    }
    out
}
