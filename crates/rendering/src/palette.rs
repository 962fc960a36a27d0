//! Categorical colours: zoning, roads and per-district identity colours.

use bevy::prelude::*;

use citygen::districts::Zoning;

pub const ROAD_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);
pub const JUNCTION_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
pub const EMPTY_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);

pub fn zoning_color(zoning: Zoning) -> Color {
    match zoning {
        Zoning::Residential => Color::srgb(0.0, 1.0, 0.0),
        Zoning::Commercial => Color::srgb(0.0, 0.0, 1.0),
        Zoning::Industrial => Color::srgb(1.0, 1.0, 0.0),
        Zoning::Empty => EMPTY_COLOR,
    }
}

/// Stable colour for a district id. Hues step by the golden angle so
/// neighbouring ids stay far apart on the colour wheel.
pub fn district_color(id: u32) -> Color {
    const GOLDEN_ANGLE: f32 = 137.507_77;
    let hue = (id as f32 * GOLDEN_ANGLE) % 360.0;
    let lightness = if id % 2 == 0 { 0.55 } else { 0.45 };
    Color::hsl(hue, 0.65, lightness)
}
