use std::collections::BTreeMap;

use crate::grid::CityGrid;

use super::types::District;

/// One district per distinct id in the grid, sorted by id, each holding its
/// cells in row-major order.
pub fn collect_districts(grid: &CityGrid) -> Vec<District> {
    let mut by_id: BTreeMap<_, District> = BTreeMap::new();
    for (idx, cell) in grid.cells.iter().enumerate() {
        if let Some(id) = cell.district_id() {
            by_id
                .entry(id)
                .or_insert_with(|| District::new(id))
                .cells
                .push(idx);
        }
    }
    by_id.into_values().collect()
}
