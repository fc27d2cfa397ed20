//! Planner output consumed by renderers and result parsers

use serde::{Deserialize, Serialize};

use crate::spatial::Point;

/// Ordered path from start to goal
///
/// Serialises as `{"states": [{"x", "y"}, ...], "success", "length"}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathResult {
    /// Path vertices, empty when no path was found
    pub states: Vec<Point>,
    /// Whether the goal was reached
    pub success: bool,
    /// Sum of Euclidean distances between consecutive states
    pub length: f64,
}

impl PathResult {
    /// Result for a failed query
    pub const fn failure() -> Self {
        Self {
            states: Vec::new(),
            success: false,
            length: 0.0,
        }
    }

    /// Successful result over the given vertices
    pub fn from_states(states: Vec<Point>) -> Self {
        let length = Self::compute_length(&states);
        Self {
            states,
            success: true,
            length,
        }
    }

    /// Polyline length, zero for fewer than two states
    pub fn compute_length(states: &[Point]) -> f64 {
        states
            .windows(2)
            .map(|pair| match pair {
                [a, b] => a.distance(*b),
                _ => 0.0,
            })
            .sum()
    }

    /// Test if the path has no states
    pub const fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
