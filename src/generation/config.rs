//! Map generation parameters and their validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::io::configuration::{DEFAULT_OBSTACLE_DENSITY, DEFAULT_SEED, MAX_GRID_DIMENSION};
use crate::io::error::{PlannerError, Result, invalid_configuration};

/// Procedural map family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapKind {
    /// Independent per-cell obstacles with fixed probability
    RandomUniform,
    /// Perfect maze from a randomized Kruskal spanning tree
    Maze,
}

impl MapKind {
    /// Name used in JSON records and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Maze => "maze",
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapKind {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "random_uniform" => Ok(Self::RandomUniform),
            "maze" => Ok(Self::Maze),
            other => Err(invalid_configuration(
                "type",
                &other,
                &"expected 'random_uniform' or 'maze'",
            )),
        }
    }
}

const fn default_obstacle_density() -> f64 {
    DEFAULT_OBSTACLE_DENSITY
}

const fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Parameters for a single generated map
///
/// For [`MapKind::Maze`], `width` and `height` count maze cells; the grid
/// produced is `2 * height + 1` rows by `2 * width + 1` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
    /// Columns (or maze cells across)
    pub width: usize,
    /// Rows (or maze cells down)
    pub height: usize,
    /// Map family
    #[serde(rename = "type")]
    pub kind: MapKind,
    /// Blocking probability for random-uniform maps
    #[serde(default = "default_obstacle_density")]
    pub obstacle_density: f64,
    /// Seed for the map's random stream
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl MapConfig {
    /// Random-uniform map parameters
    pub const fn random_uniform(
        width: usize,
        height: usize,
        obstacle_density: f64,
        seed: u64,
    ) -> Self {
        Self {
            width,
            height,
            kind: MapKind::RandomUniform,
            obstacle_density,
            seed,
        }
    }

    /// Maze parameters, dimensions given in maze cells
    pub const fn maze(cells_wide: usize, cells_high: usize, seed: u64) -> Self {
        Self {
            width: cells_wide,
            height: cells_high,
            kind: MapKind::Maze,
            obstacle_density: DEFAULT_OBSTACLE_DENSITY,
            seed,
        }
    }

    /// Parse a configuration record from JSON
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for malformed JSON, missing or unknown
    /// fields, an unknown `type`, or values that fail validation
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|error| invalid_configuration("map_config", &"<json>", &error))?;
        config.validate()?;
        Ok(config)
    }

    /// Grid dimensions `(rows, cols)` this configuration produces
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the dimensions are zero or exceed
    /// the maximum grid dimension
    pub fn output_dimensions(&self) -> Result<(usize, usize)> {
        if self.width == 0 {
            return Err(invalid_configuration(
                "width",
                &self.width,
                &"must be positive",
            ));
        }
        if self.height == 0 {
            return Err(invalid_configuration(
                "height",
                &self.height,
                &"must be positive",
            ));
        }

        let (rows, cols) = match self.kind {
            MapKind::RandomUniform => (Some(self.height), Some(self.width)),
            MapKind::Maze => (maze_extent(self.height), maze_extent(self.width)),
        };

        match (rows, cols) {
            (Some(rows), Some(cols))
                if rows <= MAX_GRID_DIMENSION && cols <= MAX_GRID_DIMENSION =>
            {
                Ok((rows, cols))
            }
            _ => Err(invalid_configuration(
                "width/height",
                &format!("{}x{}", self.width, self.height),
                &format!("generated grid would exceed {MAX_GRID_DIMENSION} cells per side"),
            )),
        }
    }

    /// Check every parameter before any grid is allocated
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` describing the first offending parameter
    pub fn validate(&self) -> Result<()> {
        self.output_dimensions()?;

        if self.kind == MapKind::RandomUniform
            && !(self.obstacle_density.is_finite()
                && (0.0..=1.0).contains(&self.obstacle_density))
        {
            return Err(invalid_configuration(
                "obstacle_density",
                &self.obstacle_density,
                &"must lie within [0, 1]",
            ));
        }

        Ok(())
    }
}

fn maze_extent(cells: usize) -> Option<usize> {
    cells.checked_mul(2)?.checked_add(1)
}
