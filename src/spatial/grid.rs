//! Occupancy grid, continuous points and discrete cell addresses
//!
//! The grid is immutable once built. Cells are addressed with signed
//! coordinates so that off-grid neighbors can be named without wrapping;
//! anything outside `[0, height) x [0, width)` is treated as blocked by the
//! collision checker.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_grid};

/// Row/column used for points whose coordinates are not finite
const OFF_GRID: i64 = i64::MIN;

/// Continuous location in grid space
///
/// The integer part of `x` selects a column and the integer part of `y`
/// selects a row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Column coordinate
    pub x: f64,
    /// Row coordinate
    pub y: f64,
}

impl Point {
    /// Create a point from column and row coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Cell containing this point (both coordinates floored)
    pub fn cell(self) -> Cell {
        Cell::from_point(self)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<Cell> for Point {
    fn from(cell: Cell) -> Self {
        Self {
            x: cell.col as f64,
            y: cell.row as f64,
        }
    }
}

/// Discrete grid address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index (may lie outside the grid)
    pub row: i64,
    /// Column index (may lie outside the grid)
    pub col: i64,
}

impl Cell {
    /// Create a cell from row and column indices
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Floor a continuous point to the cell containing it
    ///
    /// Non-finite coordinates map to an address that is never on a grid.
    pub fn from_point(point: Point) -> Self {
        Self {
            row: floor_coordinate(point.y),
            col: floor_coordinate(point.x),
        }
    }

    /// Cell displaced by the given row and column deltas
    #[must_use]
    pub const fn offset(self, d_row: i64, d_col: i64) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }
}

fn floor_coordinate(value: f64) -> i64 {
    if value.is_finite() {
        // Saturating float-to-int cast keeps far-away points off the grid
        value.floor() as i64
    } else {
        OFF_GRID
    }
}

/// Row-major grid of free (`false`) and blocked (`true`) cells
///
/// Shape is `(height, width)`; both dimensions are positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    occupancy: Array2<bool>,
}

impl OccupancyGrid {
    /// Create an obstacle-free grid
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the maximum
    /// grid dimension
    pub fn free(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            occupancy: Array2::from_elem((height, width), false),
        })
    }

    /// Wrap an occupancy array of shape `(height, width)`
    ///
    /// # Errors
    ///
    /// Returns an error if the array has an empty or oversized axis
    pub fn from_array(occupancy: Array2<bool>) -> Result<Self> {
        let (height, width) = occupancy.dim();
        check_dimensions(width, height)?;
        Ok(Self { occupancy })
    }

    /// Build a grid from nested rows, `true` marking blocked cells
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are empty or not all the same length
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(invalid_grid(&format!(
                "row {index} has {} cells, expected {width}",
                row.len()
            )));
        }

        let cells: Vec<bool> = rows.into_iter().flatten().collect();
        let occupancy = Array2::from_shape_vec((height, width), cells)
            .map_err(|error| invalid_grid(&error))?;
        Ok(Self { occupancy })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.occupancy.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.occupancy.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.occupancy.len()
    }

    /// Number of free cells
    pub fn free_cell_count(&self) -> usize {
        self.occupancy.iter().filter(|&&blocked| !blocked).count()
    }

    /// Underlying occupancy array
    pub const fn occupancy(&self) -> &Array2<bool> {
        &self.occupancy
    }

    /// Blocked state of an in-bounds cell, `None` when off the grid
    pub fn blocked(&self, cell: Cell) -> Option<bool> {
        let row = usize::try_from(cell.row).ok()?;
        let col = usize::try_from(cell.col).ok()?;
        self.occupancy.get([row, col]).copied()
    }

    /// Whether the cell lies inside the grid
    pub fn contains(&self, cell: Cell) -> bool {
        self.blocked(cell).is_some()
    }

    /// Flat row-major index of an in-bounds cell
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.row as usize * self.width() + cell.col as usize)
    }

    /// Cell addressed by a flat row-major index
    pub fn cell_at(&self, index: usize) -> Cell {
        let width = self.width();
        Cell::new((index / width) as i64, (index % width) as i64)
    }

    /// Occupancy as nested rows, `true` marking blocked cells
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.occupancy.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_grid(&format!(
            "dimensions {width}x{height} must both be positive"
        )));
    }
    if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(invalid_grid(&format!(
            "dimensions {width}x{height} exceed the maximum of {MAX_GRID_DIMENSION}"
        )));
    }
    Ok(())
}
