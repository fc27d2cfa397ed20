//! Spatial data structures and grid queries
//!
//! This module contains:
//! - The occupancy grid with its point and cell address types
//! - Occupancy and line-of-sight checks against a grid

/// Point occupancy and Bresenham visibility checks
pub mod collision;
/// Occupancy grid and coordinate types
pub mod grid;

pub use grid::{Cell, OccupancyGrid, Point};
