//! Road segment extraction: connected runs of road cells bounded by
//! junctions, each with its cells ordered into a drawable chain.

mod ordering;
mod trace;
#[cfg(test)]
mod tests;

use bevy::math::Vec2;

pub use ordering::order_segment;
pub use trace::trace_segments;

/// One traced road component.
///
/// `cells` and `points` are parallel: `points[i]` is the world-space centre
/// of grid index `cells[i]`. Junctions bounding the segment appear in both
/// `cells` and `junctions`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoadSegment {
    pub points: Vec<Vec2>,
    pub cells: Vec<usize>,
    pub junctions: Vec<usize>,
}

impl RoadSegment {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum of straight-line distances between consecutive points.
    pub fn polyline_length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

/// Traces every segment and orders each one for rendering.
pub fn build_road_network(grid: &crate::grid::CityGrid) -> Vec<RoadSegment> {
    let mut segments = trace_segments(grid);
    for segment in &mut segments {
        order_segment(segment);
    }
    segments
}
