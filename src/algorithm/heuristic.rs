use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::spatial::Cell;

/// Cost-to-go estimate used by A*
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Exact 8-connected distance on an empty grid; admissible and consistent
    #[default]
    Octile,
    /// Straight-line distance; admissible but looser than octile
    Euclidean,
    /// Axis distance sum; overestimates diagonal runs, so paths may be suboptimal
    Manhattan,
}

impl Heuristic {
    /// Estimated cost from `from` to `goal`
    pub fn estimate(self, from: Cell, goal: Cell) -> f64 {
        let d_row = (goal.row - from.row).abs() as f64;
        let d_col = (goal.col - from.col).abs() as f64;
        match self {
            Self::Octile => octile(d_row, d_col),
            Self::Euclidean => d_row.hypot(d_col),
            Self::Manhattan => d_row + d_col,
        }
    }
}

/// `max(dr, dc) + (√2 - 1) * min(dr, dc)`
pub fn octile(d_row: f64, d_col: f64) -> f64 {
    (std::f64::consts::SQRT_2 - 1.0).mul_add(d_row.min(d_col), d_row.max(d_col))
}
