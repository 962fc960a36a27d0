// ---------------------------------------------------------------------------
// CityGenError: typed failures of the layout pipeline
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors surfaced by configuration loading, grid transport and the
/// coordinate-taking operations of the pipeline.
///
/// Degraded but valid outcomes (seed shortfall, stagnated growth, discarded
/// lots) are not errors; they are recorded in the pipeline report instead.
#[derive(Debug, Clone, PartialEq)]
pub enum CityGenError {
    /// A configuration value is outside its accepted range.
    InvalidConfig(String),
    /// A flat value array does not match the declared grid size.
    GridSizeMismatch { expected: usize, found: usize },
    /// JSON encoding or decoding failed.
    Json(String),
    /// A coordinate lies outside the grid.
    OutOfBounds { x: i32, y: i32, size: usize },
}

impl fmt::Display for CityGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityGenError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            CityGenError::GridSizeMismatch { expected, found } => write!(
                f,
                "Grid size mismatch: expected {expected} cells, found {found}"
            ),
            CityGenError::Json(msg) => write!(f, "JSON error: {msg}"),
            CityGenError::OutOfBounds { x, y, size } => {
                write!(f, "Coordinate ({x}, {y}) is outside a {size}x{size} grid")
            }
        }
    }
}

impl std::error::Error for CityGenError {}

impl From<serde_json::Error> for CityGenError {
    fn from(e: serde_json::Error) -> Self {
        CityGenError::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_config() {
        let err = CityGenError::InvalidConfig("grid_size must be greater than zero".into());
        assert_eq!(
            format!("{err}"),
            "Invalid configuration: grid_size must be greater than zero"
        );
    }

    #[test]
    fn test_display_size_mismatch() {
        let err = CityGenError::GridSizeMismatch {
            expected: 100,
            found: 99,
        };
        let msg = format!("{err}");
        assert!(msg.contains("100"), "got: {msg}");
        assert!(msg.contains("99"), "got: {msg}");
    }

    #[test]
    fn test_display_out_of_bounds() {
        let err = CityGenError::OutOfBounds {
            x: -1,
            y: 4,
            size: 10,
        };
        assert_eq!(format!("{err}"), "Coordinate (-1, 4) is outside a 10x10 grid");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<i32>>("[1, 2").unwrap_err();
        let err: CityGenError = json_err.into();
        assert!(matches!(err, CityGenError::Json(_)));
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CityGenError::Json("eof".into()));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
