//! ASCII rendering of the district/road grid.
//!
//! Provides two views:
//! - **Plain**: one character per cell, rows joined by newlines. The same
//!   format is accepted by [`parse_grid`], which test fixtures rely on.
//! - **Detail**: the plain view with row labels, a column header and a legend,
//!   for log output.
//!
//! Maps are built on demand from `&CityGrid`; nothing runs per frame.

use crate::districts::Zoning;
use crate::error::CityGenError;
use crate::grid::{Cell, CityGrid, DistrictId};

const DISTRICT_GLYPHS: &[u8] = b"123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

// -----------------------------------------------------------------------
// Character encoding
// -----------------------------------------------------------------------

/// `.` empty, `#` road, `+` junction, `1`-`9` then `a`-`z`, `A`-`Z` for
/// district ids. Ids past the glyph table render as `?`.
pub fn cell_to_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Road => '#',
        Cell::Junction => '+',
        Cell::District(DistrictId(id)) => district_char(id),
    }
}

fn district_char(id: u32) -> char {
    id.checked_sub(1)
        .and_then(|i| DISTRICT_GLYPHS.get(i as usize))
        .map(|b| *b as char)
        .unwrap_or('?')
}

pub fn char_to_cell(ch: char) -> Option<Cell> {
    match ch {
        '.' => Some(Cell::Empty),
        '#' => Some(Cell::Road),
        '+' => Some(Cell::Junction),
        _ => DISTRICT_GLYPHS
            .iter()
            .position(|b| *b as char == ch)
            .map(|i| Cell::District(DistrictId(i as u32 + 1))),
    }
}

pub fn zoning_char(zoning: Zoning) -> char {
    match zoning {
        Zoning::Empty => '_',
        Zoning::Residential => 'R',
        Zoning::Commercial => 'C',
        Zoning::Industrial => 'I',
    }
}

// -----------------------------------------------------------------------
// Plain map
// -----------------------------------------------------------------------

pub fn render_grid(grid: &CityGrid) -> String {
    grid.cells
        .chunks(grid.size.max(1))
        .map(|row| row.iter().map(|c| cell_to_char(*c)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses the plain format. Leading and trailing whitespace on each line is
/// ignored, blank lines are skipped, and the result must be square.
pub fn parse_grid(text: &str) -> Result<CityGrid, CityGenError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let size = rows.len();
    let mut cells = Vec::with_capacity(size * size);
    for (y, row) in rows.iter().enumerate() {
        let width = row.chars().count();
        if width != size {
            return Err(CityGenError::GridSizeMismatch {
                expected: size,
                found: width,
            });
        }
        for (x, ch) in row.chars().enumerate() {
            let cell = char_to_cell(ch).ok_or_else(|| {
                CityGenError::InvalidConfig(format!("unknown map glyph '{ch}' at ({x}, {y})"))
            })?;
            cells.push(cell);
        }
    }
    Ok(CityGrid { cells, size })
}

// -----------------------------------------------------------------------
// Detail map
// -----------------------------------------------------------------------

pub fn build_detail_map(grid: &CityGrid) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(grid.size + 4);
    lines.push(build_col_header(grid.size));
    for (y, row) in grid.cells.chunks(grid.size.max(1)).enumerate() {
        let mut line = format!("{y:>4} | ");
        line.extend(row.iter().map(|c| cell_to_char(*c)));
        lines.push(line);
    }
    lines.push(String::new());
    lines.push("Legend:".to_string());
    lines.push("  .=Empty  #=Road  +=Junction  1-9,a-z,A-Z=District id".to_string());
    lines.join("\n")
}

fn build_col_header(width: usize) -> String {
    let interval = if width > 40 { 10 } else { 5 };
    let mut header = String::from("       ");
    let mut col = 0;
    while col < width {
        if col % interval == 0 {
            let label = col.to_string();
            header.push_str(&label);
            col += label.len();
        } else {
            header.push(' ');
            col += 1;
        }
    }
    header.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_char() {
        assert_eq!(cell_to_char(Cell::Empty), '.');
        assert_eq!(cell_to_char(Cell::Road), '#');
        assert_eq!(cell_to_char(Cell::Junction), '+');
        assert_eq!(cell_to_char(Cell::District(DistrictId(1))), '1');
        assert_eq!(cell_to_char(Cell::District(DistrictId(10))), 'a');
        assert_eq!(cell_to_char(Cell::District(DistrictId(36))), 'A');
        assert_eq!(cell_to_char(Cell::District(DistrictId(500))), '?');
    }

    #[test]
    fn test_render_then_parse() {
        let text = "11#2\n11#2\n##+#\n33#4";
        let grid = parse_grid(text).unwrap();
        assert_eq!(grid.size, 4);
        assert_eq!(grid.get(2, 2), Cell::Junction);
        assert_eq!(grid.get(3, 3), Cell::District(DistrictId(4)));
        assert_eq!(render_grid(&grid), text);
    }

    #[test]
    fn test_parse_ignores_indentation() {
        let grid = parse_grid(
            "
            1.
            .2
            ",
        )
        .unwrap();
        assert_eq!(grid.size, 2);
        assert_eq!(grid.get(1, 0), Cell::Empty);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert!(matches!(
            parse_grid("11\n1"),
            Err(CityGenError::GridSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_glyph() {
        assert!(parse_grid("1~\n11").is_err());
    }

    #[test]
    fn test_detail_map_has_labels_and_legend() {
        let grid = parse_grid("1#\n#2").unwrap();
        let map = build_detail_map(&grid);
        assert!(map.contains("   0 | 1#"));
        assert!(map.contains("   1 | #2"));
        assert!(map.contains("Legend:"));
    }
}
