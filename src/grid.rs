//! Coordinate tables rendered as a character grid.
//!
//! A coordinate table has a header row naming an x coordinate, a
//! character and a y coordinate column (in any order, loosely matched):
//!
//! | x-coordinate | Character | y-coordinate |
//! |--------------|-----------|--------------|
//! | 0            | █         | 0            |
//! | 1            | ░         | 0            |
//!
//! Each data row places its character at `(x, y)` in a space-filled grid.

use anyhow::{bail, Result};

use crate::extract::TextTable;

/// Largest x or y a coordinate table may use. Bounds the grid allocation.
pub const MAX_COORDINATE: usize = 10_000;

/// A character placed at a grid position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPoint {
    pub x: usize,
    pub y: usize,
    pub text: String,
}

/// Column indices of a coordinate table's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateColumns {
    pub x: usize,
    pub text: usize,
    pub y: usize,
}

impl CoordinateColumns {
    /// Find the x, character and y columns in a header row.
    ///
    /// Matching is case-insensitive. Returns `None` unless all three are found.
    pub fn detect(header: &[String]) -> Option<Self> {
        let mut x = None;
        let mut text = None;
        let mut y = None;

        for (i, cell) in header.iter().enumerate() {
            let cell = cell.to_lowercase();
            let is_coordinate = cell.contains("coord") || cell.contains("position");
            if cell.contains('x') && is_coordinate {
                x = Some(i);
            } else if cell.contains("char") {
                text = Some(i);
            } else if cell.contains('y') && is_coordinate {
                y = Some(i);
            }
        }

        Some(Self {
            x: x?,
            text: text?,
            y: y?,
        })
    }

    fn max_index(self) -> usize {
        self.x.max(self.text).max(self.y)
    }
}

/// Parse the data rows of a coordinate table.
///
/// Rows too short to hold every column, rows whose coordinates have no
/// digits or exceed [`MAX_COORDINATE`], and rows with an empty character
/// cell are skipped.
pub fn parse_points(table: &TextTable) -> Vec<GridPoint> {
    if table.rows.len() < 2 {
        return Vec::new();
    }
    let Some(columns) = CoordinateColumns::detect(&table.rows[0]) else {
        return Vec::new();
    };

    table
        .rows
        .iter()
        .skip(1)
        .filter(|row| row.len() > columns.max_index())
        .filter_map(|row| {
            let text = row[columns.text].trim();
            if text.is_empty() {
                return None;
            }
            Some(GridPoint {
                x: parse_coordinate(&row[columns.x])?,
                y: parse_coordinate(&row[columns.y])?,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Points of the first table that yields any.
pub fn find_points(tables: &[TextTable]) -> Vec<GridPoint> {
    tables
        .iter()
        .map(parse_points)
        .find(|points| !points.is_empty())
        .unwrap_or_default()
}

/// Digits of a cell as a coordinate; everything else is ignored.
fn parse_coordinate(cell: &str) -> Option<usize> {
    let digits: String = cell.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits
        .parse()
        .ok()
        .filter(|&coordinate| coordinate <= MAX_COORDINATE)
}

/// Render points into a grid, one line per row.
///
/// Only the first character of each point's text is drawn; later points
/// overwrite earlier ones at the same position. Points beyond
/// [`MAX_COORDINATE`] are an error.
pub fn render_grid(points: &[GridPoint]) -> Result<String> {
    let Some(max_x) = points.iter().map(|p| p.x).max() else {
        return Ok(String::new());
    };
    let max_y = points.iter().map(|p| p.y).max().unwrap_or(0);

    if max_x > MAX_COORDINATE || max_y > MAX_COORDINATE {
        bail!("grid coordinate ({max_x}, {max_y}) exceeds the {MAX_COORDINATE} limit");
    }
    let (Some(width), Some(height)) = (max_x.checked_add(1), max_y.checked_add(1)) else {
        bail!("grid coordinate ({max_x}, {max_y}) overflows");
    };

    let mut grid = vec![vec![' '; width]; height];
    for point in points {
        if let Some(ch) = point.text.chars().next() {
            grid[point.y][point.x] = ch;
        }
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    Ok(out)
}
