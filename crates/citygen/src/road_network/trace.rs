use std::collections::HashSet;

use bevy::prelude::*;

use crate::grid::{Cell, CityGrid};

use super::RoadSegment;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Road,
    Junction,
    Queued,
    Visited,
    Other,
}

/// Splits the road cells of `grid` into segments with a worklist walk.
///
/// Road cells reachable through the 8-neighbourhood join the current
/// segment. Junctions are recorded but never walked through. A cell that
/// touches a junction only passes its 4-connected road neighbours on to the
/// worklist, so diagonal contacts around an intersection do not merge
/// separate streets.
pub fn trace_segments(grid: &CityGrid) -> Vec<RoadSegment> {
    let geo = grid.geometry();
    let mut marks: Vec<Mark> = grid
        .cells
        .iter()
        .map(|c| match c {
            Cell::Road => Mark::Road,
            Cell::Junction => Mark::Junction,
            _ => Mark::Other,
        })
        .collect();

    let mut segments = Vec::new();
    let mut frontier: Vec<usize> = Vec::new();
    for start in 0..marks.len() {
        if marks[start] != Mark::Road {
            continue;
        }
        let mut segment = RoadSegment::default();
        let mut junctions_seen: HashSet<usize> = HashSet::new();
        marks[start] = Mark::Queued;
        frontier.push(start);
        while let Some(idx) = frontier.pop() {
            marks[idx] = Mark::Visited;
            segment.cells.push(idx);

            let pos = geo.from_index(idx);
            let mut roads = Vec::new();
            let mut meets_junction = false;
            for n in geo.moore_neighbors(pos.x, pos.y) {
                let n_idx = geo.index_of(n);
                match marks[n_idx] {
                    Mark::Road => roads.push((n, n_idx)),
                    Mark::Junction => {
                        meets_junction = true;
                        if junctions_seen.insert(n_idx) {
                            segment.cells.push(n_idx);
                            segment.junctions.push(n_idx);
                        }
                    }
                    Mark::Queued | Mark::Visited | Mark::Other => {}
                }
            }
            for (n, n_idx) in roads {
                let orthogonal = n.x == pos.x || n.y == pos.y;
                if !meets_junction || orthogonal {
                    marks[n_idx] = Mark::Queued;
                    frontier.push(n_idx);
                }
            }
        }
        segment.points = segment.cells.iter().map(|i| geo.cell_center(*i)).collect();
        segments.push(segment);
    }
    debug!("Traced {} road segments", segments.len());
    segments
}
