//! Grid path planning benchmark: A* and Dijkstra on generated occupancy grids
//!
//! Maps are produced from a seed (random-uniform obstacles or Kruskal mazes),
//! searched with an 8-connected best-first planner, and benchmark runs are
//! reduced to summaries with 95% confidence intervals.

#![forbid(unsafe_code)]

/// Best-first search, heuristics and planner selection
pub mod algorithm;
/// Path metrics and the benchmark engine
pub mod analysis;
/// Seeded map generators
pub mod generation;
/// Command line, configuration constants, errors, progress and JSON records
pub mod io;
/// Sample statistics
pub mod math;
/// Occupancy grid, coordinates and collision queries
pub mod spatial;

pub use io::error::{PlannerError, Result};
