//! Procedural occupancy-grid generation
//!
//! Generation is a pure function of its [`MapConfig`]: every call seeds its
//! own random stream, so identical parameters give bit-identical grids.

/// Generation parameters and validation
pub mod config;
/// Randomized Kruskal maze construction
pub mod maze;
/// Independent per-cell obstacle placement
pub mod uniform;
/// Disjoint-set forest used by the maze builder
pub mod union_find;

pub use config::{MapConfig, MapKind};

use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use crate::io::error::Result;
use crate::spatial::OccupancyGrid;

/// Generate an occupancy grid from validated parameters
///
/// # Errors
///
/// Returns `InvalidConfiguration` before allocating anything if the
/// parameters fail validation
pub fn generate(config: &MapConfig) -> Result<OccupancyGrid> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let occupancy = match config.kind {
        MapKind::RandomUniform => uniform::random_uniform(
            config.width,
            config.height,
            config.obstacle_density,
            &mut rng,
        ),
        MapKind::Maze => maze::maze(config.width, config.height, &mut rng),
    };

    let grid = OccupancyGrid::from_array(occupancy)?;
    debug!(
        "generated {} map {}x{} (seed {}, {} free cells)",
        config.kind,
        grid.width(),
        grid.height(),
        config.seed,
        grid.free_cell_count()
    );
    Ok(grid)
}
