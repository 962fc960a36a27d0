use crate::grid::CityGrid;

use super::types::LayerGrid;

/// Access score for a cell whose nearest road is `distance` rings away.
/// Roads themselves score 100; each further ring costs 20.
#[inline]
pub fn access_value(distance: i32) -> i32 {
    if distance <= 0 {
        return 100;
    }
    (100 - 20 * (distance - 1)).max(0)
}

/// Road-access layer: 100 on road and junction cells, otherwise scored by
/// the smallest Moore radius (up to `max_radius`) that contains a road.
/// Cells with no road within reach stay at 0.
pub fn compute_road_access(grid: &CityGrid, max_radius: i32) -> LayerGrid {
    let geo = grid.geometry();
    let mut layer = LayerGrid::new(grid.size, 0);
    for (idx, cell) in grid.cells.iter().enumerate() {
        if cell.is_road() {
            layer.set(idx, access_value(0));
            continue;
        }
        let pos = geo.from_index(idx);
        let nearest = (1..=max_radius).find(|&r| {
            geo.moore_ring(pos.x, pos.y, r)
                .iter()
                .any(|n| grid.at(*n).is_road())
        });
        if let Some(d) = nearest {
            layer.set(idx, access_value(d));
        }
    }
    layer
}
