use crate::ascii_map::parse_grid;
use crate::config::CELL_SIZE;
use crate::geometry::GridGeometry;
use crate::growth::mark_junctions;
use crate::road_network::*;

fn crossroads() -> crate::grid::CityGrid {
    let mut grid = parse_grid(
        "11#22
         11#22
         #####
         33#44
         33#44",
    )
    .unwrap();
    mark_junctions(&mut grid);
    grid
}

#[test]
fn test_straight_road_is_one_segment() {
    let grid = parse_grid("1#2\n1#2\n1#2").unwrap();
    let segments = trace_segments(&grid);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].cells, vec![1, 4, 7]);
    assert!(segments[0].junctions.is_empty());
}

#[test]
fn test_junction_splits_arms() {
    let grid = crossroads();
    assert!(grid.get(2, 2).is_junction());
    let segments = trace_segments(&grid);
    assert_eq!(segments.len(), 4);
    for segment in &segments {
        assert_eq!(segment.junctions, vec![12]);
        assert_eq!(segment.len(), 3);
        assert!(segment.cells.contains(&12));
    }
}

#[test]
fn test_every_road_cell_lands_in_exactly_one_segment() {
    let grid = crossroads();
    let segments = trace_segments(&grid);
    for (idx, cell) in grid.cells.iter().enumerate() {
        if *cell == crate::grid::Cell::Road {
            let hits = segments.iter().filter(|s| s.cells.contains(&idx)).count();
            assert_eq!(hits, 1, "road cell {idx}");
        }
    }
}

#[test]
fn test_ordering_starts_at_junction() {
    let segments = build_road_network(&crossroads());
    let north = segments.iter().find(|s| s.cells.contains(&2)).unwrap();
    assert_eq!(north.cells, vec![12, 7, 2]);
    let east = segments.iter().find(|s| s.cells.contains(&14)).unwrap();
    assert_eq!(east.cells, vec![12, 13, 14]);
}

#[test]
fn test_points_follow_cells() {
    let geo = GridGeometry::new(5);
    for segment in build_road_network(&crossroads()) {
        assert_eq!(segment.points.len(), segment.cells.len());
        for (p, c) in segment.points.iter().zip(&segment.cells) {
            assert_eq!(*p, geo.cell_center(*c));
        }
    }
}

#[test]
fn test_greedy_chain_without_junction() {
    let geo = GridGeometry::new(4);
    let cells = vec![0, 3, 1, 2];
    let mut segment = RoadSegment {
        points: cells.iter().map(|c| geo.cell_center(*c)).collect(),
        cells,
        junctions: Vec::new(),
    };
    order_segment(&mut segment);
    assert_eq!(segment.cells, vec![0, 1, 2, 3]);
    assert!((segment.polyline_length() - 3.0 * CELL_SIZE).abs() < 1e-3);
}

#[test]
fn test_no_roads_no_segments() {
    let grid = parse_grid("11\n11").unwrap();
    assert!(build_road_network(&grid).is_empty());
}

#[test]
fn test_dense_road_block_visits_each_cell_once() {
    // Every cell has up to eight road neighbours, so each one is offered to
    // the worklist many times.
    let size = 40;
    let grid = crate::grid::CityGrid::from_raw(&vec![0; size * size], size).unwrap();
    let segments = trace_segments(&grid);
    assert_eq!(segments.len(), 1);
    let mut cells = segments[0].cells.clone();
    assert_eq!(cells.len(), size * size);
    cells.sort_unstable();
    cells.dedup();
    assert_eq!(cells.len(), size * size);
}

#[test]
fn test_shared_junction_listed_once_per_segment() {
    // Both road cells of the west arm touch the junction diagonally or
    // orthogonally; it must still appear once.
    let grid = crossroads();
    for segment in trace_segments(&grid) {
        let in_cells = segment.cells.iter().filter(|&&i| i == 12).count();
        assert_eq!(in_cells, 1);
        assert_eq!(segment.junctions.len(), 1);
    }
}
