use crate::grid::{Cell, CityGrid};

/// Turns district cells whose 4-neighbourhood touches more than one
/// district into roads. Raster order, in place: a cell converted earlier in
/// the scan no longer counts as a district for the cells after it.
///
/// Returns the number of cells converted.
pub fn add_roads(grid: &mut CityGrid) -> usize {
    let size = grid.size as i32;
    let mut converted = 0;
    for y in 0..size {
        for x in 0..size {
            if !grid.get(x, y).is_district() {
                continue;
            }
            if grid.von_neumann_districts(x, y).len() > 1 {
                let idx = grid.geometry().to_index(x, y);
                grid.cells[idx] = Cell::Road;
                converted += 1;
            }
        }
    }
    converted
}

/// Empty cells with exactly one neighbouring district (8-neighbourhood)
/// join it. Raster order, in place.
pub fn patch_empty_cells(grid: &mut CityGrid) -> usize {
    let size = grid.size as i32;
    let mut patched = 0;
    for y in 0..size {
        for x in 0..size {
            if !grid.get(x, y).is_empty() {
                continue;
            }
            if let [only] = grid.moore_districts(x, y).as_slice() {
                let idx = grid.geometry().to_index(x, y);
                grid.cells[idx] = Cell::District(*only);
                patched += 1;
            }
        }
    }
    patched
}

/// Road cells bordering more than two districts become junctions.
pub fn mark_junctions(grid: &mut CityGrid) -> usize {
    let size = grid.size as i32;
    let mut marked = 0;
    for y in 0..size {
        for x in 0..size {
            if grid.get(x, y) != Cell::Road {
                continue;
            }
            if grid.moore_districts(x, y).len() > 2 {
                let idx = grid.geometry().to_index(x, y);
                grid.cells[idx] = Cell::Junction;
                marked += 1;
            }
        }
    }
    marked
}

/// Road cells whose 8-neighbourhood touches exactly one district are dead
/// ends; they return to the first district found among their 4-neighbours.
///
/// Dead ends are detected on the grid as it stands before any conversion.
pub fn trim_dead_roads(grid: &mut CityGrid) -> usize {
    let size = grid.size as i32;
    let dead: Vec<(i32, i32)> = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .filter(|&(x, y)| grid.get(x, y) == Cell::Road && grid.moore_districts(x, y).len() == 1)
        .collect();
    let mut trimmed = 0;
    for (x, y) in dead {
        let first = grid
            .geometry()
            .von_neumann_neighbors(x, y)
            .into_iter()
            .find_map(|n| grid.at(n).district_id());
        if let Some(id) = first {
            let idx = grid.geometry().to_index(x, y);
            grid.cells[idx] = Cell::District(id);
            trimmed += 1;
        }
    }
    trimmed
}

/// Widens the road network by `passes` cells. Each pass turns every cell
/// with a plain road in its 8-neighbourhood into a road, reading from the
/// grid as it was before the pass.
pub fn widen_roads(grid: &mut CityGrid, passes: u32) -> usize {
    let mut widened = 0;
    for _ in 0..passes {
        let snapshot = grid.clone();
        let geo = snapshot.geometry();
        for (idx, cell) in grid.cells.iter_mut().enumerate() {
            if cell.is_road() {
                continue;
            }
            let pos = geo.from_index(idx);
            if geo
                .moore_neighbors(pos.x, pos.y)
                .iter()
                .any(|n| snapshot.at(*n) == Cell::Road)
            {
                *cell = Cell::Road;
                widened += 1;
            }
        }
    }
    widened
}
