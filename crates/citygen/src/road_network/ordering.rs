use super::RoadSegment;

/// Reorders a segment into a greedy nearest-neighbour chain.
///
/// The first junction, if any, is swapped to the front. Each following
/// position then takes the closest remaining point to the one before it;
/// the last point is whatever remains. Not a shortest path.
pub fn order_segment(segment: &mut RoadSegment) {
    let n = segment.points.len();
    if let Some(&junction) = segment.junctions.first() {
        if let Some(first) = segment.cells.iter().position(|c| *c == junction) {
            segment.points.swap(0, first);
            segment.cells.swap(0, first);
        }
    }
    for i in 1..n.saturating_sub(1) {
        let anchor = segment.points[i - 1];
        let mut best = i;
        let mut best_dist = anchor.distance(segment.points[i]);
        for j in i + 1..n {
            let d = anchor.distance(segment.points[j]);
            if d < best_dist {
                best_dist = d;
                best = j;
            }
        }
        if best != i {
            segment.points.swap(i, best);
            segment.cells.swap(i, best);
        }
    }
}
