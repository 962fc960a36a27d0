//! District growth: the cellular automaton that turns seeds into districts
//! and the road passes that run once growth settles.

mod automaton;
mod roads;

pub use automaton::{grow_step, simulate, GrowthOutcome};
pub use roads::{add_roads, mark_junctions, patch_empty_cells, trim_dead_roads, widen_roads};
