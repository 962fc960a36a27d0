//! District discovery and zoning classification.

mod classifier;
mod discovery;
#[cfg(test)]
mod tests;
mod types;

pub use classifier::{
    available_zonings, classify_district, classify_districts, district_fractions, pick_weighted,
    sufficiency,
};
pub use discovery::collect_districts;
pub use types::{District, LayerFractions, Sufficiency, Zoning};
