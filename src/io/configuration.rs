//! Planner constants and runtime configuration defaults

// Default values for map generation parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Probability that a random-uniform cell is blocked
pub const DEFAULT_OBSTACLE_DENSITY: f64 = 0.2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension (rows or columns of the generated grid)
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Search cost model
/// Cost of an axis-aligned move
pub const AXIS_COST: f64 = 1.0;
/// Cost of a diagonal move
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Tolerance used when discarding stale frontier entries
pub const COST_EPSILON: f64 = 1e-9;

// Benchmark settings
/// Number of timed runs per experiment when the config omits `repeats`
pub const DEFAULT_REPEATS: usize = 30;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
