//! JSON transport of flat integer grids.
//!
//! The wire shape is a single object holding the grid as rows:
//! `{"grid": [[row 0], [row 1], ...]}`. Any flat row-major `i32` array with a
//! square shape can be sent this way, including the raw district grid and the
//! individual layers.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::CityGenError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDocument {
    pub grid: Vec<Vec<i32>>,
}

impl GridDocument {
    /// Splits a flat row-major array into rows of `size`.
    pub fn from_flat(values: &[i32], size: usize) -> Result<Self, CityGenError> {
        if size == 0 {
            return Err(CityGenError::GridSizeMismatch {
                expected: 0,
                found: values.len(),
            });
        }
        if values.len() != size * size {
            return Err(CityGenError::GridSizeMismatch {
                expected: size * size,
                found: values.len(),
            });
        }
        Ok(Self {
            grid: values.chunks(size).map(<[i32]>::to_vec).collect(),
        })
    }

    /// Flattens the rows back, returning the values and the side length.
    pub fn into_flat(self) -> Result<(Vec<i32>, usize), CityGenError> {
        let size = self.grid.len();
        let mut values = Vec::with_capacity(size * size);
        for row in self.grid {
            if row.len() != size {
                return Err(CityGenError::GridSizeMismatch {
                    expected: size,
                    found: row.len(),
                });
            }
            values.extend(row);
        }
        Ok((values, size))
    }
}

pub fn grid_to_json(values: &[i32], size: usize) -> Result<String, CityGenError> {
    let doc = GridDocument::from_flat(values, size)?;
    Ok(serde_json::to_string(&doc)?)
}

/// Like [`grid_to_json`], but logs the failure and yields an empty string.
pub fn grid_to_json_or_empty(values: &[i32], size: usize) -> String {
    match grid_to_json(values, size) {
        Ok(json) => json,
        Err(e) => {
            warn!("Grid export failed: {e}");
            String::new()
        }
    }
}

/// Parses a grid document. Every row must be as long as the row count.
pub fn grid_from_json(json: &str) -> Result<(Vec<i32>, usize), CityGenError> {
    let doc: GridDocument = serde_json::from_str(json)?;
    doc.into_flat()
}
