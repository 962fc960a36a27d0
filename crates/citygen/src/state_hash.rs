//! Deterministic layout hashing for reproducibility checks.
//!
//! Computes a 64-bit hash of a finished [`CityLayoutState`] in a fixed order:
//!
//! 1. Grid size and raw cell values in row-major order
//! 2. The seven simulated layers, each in row-major order
//! 3. Districts by id: zoning code, then every lot (id, size, facing, cells)
//! 4. Road segments: cell lists in trace order
//!
//! No `HashMap` iteration is involved, so identical seeds hash identically on
//! every platform.

use std::hash::{Hash, Hasher};

use bevy::prelude::*;

use crate::layers::LayerKind;
use crate::pipeline::CityLayoutState;

/// Hash of the most recently generated layout.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutHash {
    /// Number of layouts generated so far in this app.
    pub generation: u64,
    pub hash: u64,
}

// ---------------------------------------------------------------------------
// FNV-1a hasher (deterministic, no random seed)
// ---------------------------------------------------------------------------

/// FNV-1a produces the same output on every platform and Rust version,
/// unlike the randomized `DefaultHasher`.
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x00000100000001B3;

    fn new() -> Self {
        Self {
            state: Self::FNV_OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= byte as u64;
            self.state = self.state.wrapping_mul(Self::FNV_PRIME);
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Hash of a raw grid alone.
pub fn hash_raw_grid(values: &[i32]) -> u64 {
    let mut hasher = Fnv1aHasher::new();
    values.hash(&mut hasher);
    hasher.finish()
}

pub fn compute_layout_hash(state: &CityLayoutState) -> u64 {
    let mut hasher = Fnv1aHasher::new();

    state.grid.size.hash(&mut hasher);
    for cell in &state.grid.cells {
        cell.to_raw().hash(&mut hasher);
    }

    for kind in LayerKind::ALL {
        state.layers.get(kind).values.hash(&mut hasher);
    }

    for district in &state.districts {
        district.id.0.hash(&mut hasher);
        district.zoning.code().hash(&mut hasher);
        for lot in &district.lots {
            lot.id.hash(&mut hasher);
            lot.width.hash(&mut hasher);
            lot.height.hash(&mut hasher);
            (lot.facing as u8).hash(&mut hasher);
            lot.cells.hash(&mut hasher);
        }
    }

    for segment in &state.roads {
        segment.cells.hash(&mut hasher);
    }

    hasher.finish()
}
