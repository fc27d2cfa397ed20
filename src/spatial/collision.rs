//! Point occupancy and rasterized line-of-sight queries
//!
//! Off-grid addresses are reported as occupied, so callers never need a
//! separate bounds check before querying.

use crate::spatial::grid::{Cell, OccupancyGrid, Point};

/// Whether `(row, col)` is blocked or outside the grid
pub fn occupied(grid: &OccupancyGrid, row: i64, col: i64) -> bool {
    occupied_cell(grid, Cell::new(row, col))
}

/// Whether a cell is blocked or outside the grid
pub fn occupied_cell(grid: &OccupancyGrid, cell: Cell) -> bool {
    grid.blocked(cell).unwrap_or(true)
}

/// Whether the cell containing `point` is free
pub fn is_valid(grid: &OccupancyGrid, point: Point) -> bool {
    !occupied_cell(grid, point.cell())
}

/// Visibility between two continuous points
///
/// Both points are floored to their cells before rasterizing, so sub-cell
/// positions within the same cells give the same answer.
pub fn line_of_sight(grid: &OccupancyGrid, from: Point, to: Point) -> bool {
    line_of_sight_cells(grid, from.cell(), to.cell())
}

/// Bresenham walk from `from` to `to`, failing on the first occupied cell
///
/// Visits at most `max(|dr|, |dc|) + 1` cells along the major axis and
/// allocates nothing.
pub fn line_of_sight_cells(grid: &OccupancyGrid, from: Cell, to: Cell) -> bool {
    // Endpoints are on the walk anyway; rejecting them first keeps the deltas in range
    if occupied_cell(grid, from) || occupied_cell(grid, to) {
        return false;
    }

    let d_row = (to.row - from.row).abs();
    let d_col = (to.col - from.col).abs();
    let step_row = if from.row < to.row { 1 } else { -1 };
    let step_col = if from.col < to.col { 1 } else { -1 };

    let mut row = from.row;
    let mut col = from.col;

    if d_col >= d_row {
        let mut error = 2 * d_row - d_col;
        for _ in 0..=d_col {
            if occupied(grid, row, col) {
                return false;
            }
            if row == to.row && col == to.col {
                return true;
            }
            if error > 0 {
                row += step_row;
                error -= 2 * d_col;
            }
            error += 2 * d_row;
            col += step_col;
        }
    } else {
        let mut error = 2 * d_col - d_row;
        for _ in 0..=d_row {
            if occupied(grid, row, col) {
                return false;
            }
            if row == to.row && col == to.col {
                return true;
            }
            if error > 0 {
                col += step_col;
                error -= 2 * d_row;
            }
            error += 2 * d_col;
            row += step_row;
        }
    }

    true
}
