use crate::config::{BuildingEffectParams, EffectParams};
use crate::error::CityGenError;
use crate::geometry::{GridGeometry, GridPos};

use super::types::{BuildingKind, CityLayers, SpreadShape};

/// Cells reached by a building's spread, origin excluded.
///
/// The spread neighbourhood is taken around every cell of the footprint
/// anchored at `origin` (extending right and down) and merged without
/// duplicates, in first-reached order.
pub fn effect_footprint(
    geo: GridGeometry,
    kind: BuildingKind,
    origin: GridPos,
    effect: &EffectParams,
) -> Vec<GridPos> {
    let mut reached: Vec<GridPos> = Vec::new();
    let mut seen = vec![false; geo.cell_count()];
    seen[geo.index_of(origin)] = true;
    for fy in 0..effect.footprint_height.max(1) {
        for fx in 0..effect.footprint_width.max(1) {
            let (x, y) = (origin.x + fx, origin.y + fy);
            let spread = match kind.spread_shape() {
                SpreadShape::VonNeumann => geo.von_neumann_within_radius(x, y, effect.radius),
                SpreadShape::Moore => geo.moore_within_radius(x, y, effect.radius),
            };
            for p in spread {
                let idx = geo.index_of(p);
                if !seen[idx] {
                    seen[idx] = true;
                    reached.push(p);
                }
            }
        }
    }
    reached
}

/// Applies one building's delta to its target layer at the origin and at
/// every reached cell, clamping each write to `[0, 100]`.
///
/// Effects are additive: applying the same building twice stacks until the
/// clamp. Returns the number of cells written.
pub fn apply_building_effect(
    layers: &mut CityLayers,
    effects: &BuildingEffectParams,
    kind: BuildingKind,
    x: i32,
    y: i32,
) -> Result<usize, CityGenError> {
    let layer = layers.get_mut(kind.target_layer());
    let geo = GridGeometry::new(layer.size);
    if !geo.in_bounds(x, y) {
        return Err(CityGenError::OutOfBounds {
            x,
            y,
            size: layer.size,
        });
    }
    let effect = effects.for_kind(kind);
    let origin = GridPos::new(x, y);
    layer.add_clamped(geo.index_of(origin), effect.delta);
    let reached = effect_footprint(geo, kind, origin, &effect);
    for p in &reached {
        layer.add_clamped(geo.index_of(*p), effect.delta);
    }
    Ok(reached.len() + 1)
}
