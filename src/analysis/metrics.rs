//! Path quality and cost metrics for a single planning run

use serde::Serialize;
use std::f64::consts::{PI, TAU};
use std::time::Duration;

use crate::algorithm::PlanOutcome;
use crate::spatial::Point;

// Segments shorter than this carry no usable heading
const MIN_SEGMENT_LENGTH: f64 = 1e-9;

/// Measurements taken from one timed planner run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathMetrics {
    /// Length of the returned path
    pub path_length: f64,
    /// Wall-clock planning time in milliseconds
    pub computation_time_ms: f64,
    /// Cells expanded by the search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Total absolute heading change along the path, in radians
    pub smoothness: f64,
    /// Discrete bending energy of the path
    pub energy: f64,
}

impl PathMetrics {
    /// Collect metrics from a planner outcome and its measured duration
    pub fn collect(outcome: &PlanOutcome, elapsed: Duration) -> Self {
        let states = &outcome.path.states;
        Self {
            path_length: outcome.path.length,
            computation_time_ms: elapsed.as_secs_f64() * 1_000.0,
            nodes_expanded: outcome.nodes_expanded,
            success: outcome.path.success,
            smoothness: smoothness(states),
            energy: energy(states),
        }
    }
}

fn heading(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Absolute difference between two headings, wrapped into `[0, π]`
pub fn angle_difference(a: f64, b: f64) -> f64 {
    ((b - a + PI).rem_euclid(TAU) - PI).abs()
}

/// Sum of heading changes between consecutive segments
pub fn smoothness(states: &[Point]) -> f64 {
    states
        .windows(3)
        .map(|window| match window {
            [a, b, c] => angle_difference(heading(*a, *b), heading(*b, *c)),
            _ => 0.0,
        })
        .sum()
}

/// Sum over interior vertices of `κ² · ½(d₁ + d₂)`
///
/// Curvature `κ` is the heading change divided by the mean length of the two
/// adjacent segments. Vertices next to a degenerate segment are skipped.
pub fn energy(states: &[Point]) -> f64 {
    states
        .windows(3)
        .map(|window| match window {
            [a, b, c] => {
                let d1 = a.distance(*b);
                let d2 = b.distance(*c);
                if d1 < MIN_SEGMENT_LENGTH || d2 < MIN_SEGMENT_LENGTH {
                    return 0.0;
                }
                let span = 0.5 * (d1 + d2);
                let kappa = angle_difference(heading(*a, *b), heading(*b, *c)) / span;
                kappa * kappa * span
            }
            _ => 0.0,
        })
        .sum()
}
