//! Command-line interface for map generation, single queries and benchmarks
//!
//! Every command prints one JSON document on stdout. Progress bars, when
//! shown, go to stderr.

use crate::algorithm::{Heuristic, Planner, PlannerKind, SearchLimits};
use crate::analysis::benchmark::{BenchmarkConfig, BenchmarkReport, BenchmarkRunner};
use crate::generation::{MapConfig, MapKind, generate};
use crate::io::configuration::{DEFAULT_OBSTACLE_DENSITY, DEFAULT_SEED};
use crate::io::error::{Result, file_system_error, invalid_configuration};
use crate::spatial::{OccupancyGrid, Point};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gridbench")]
#[command(
    author,
    version,
    about = "Benchmark A* and Dijkstra on generated occupancy grids"
)]
/// Command-line arguments for the grid planning tool
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a map and print it as a grid record
    Generate(MapArgs),
    /// Plan one path and print the outcome
    Solve(SolveArgs),
    /// Run a benchmark configuration and print the summaries
    Benchmark(BenchmarkArgs),
}

/// Map generation flags
#[derive(Args, Debug, Clone)]
pub struct MapArgs {
    /// Map family: `random_uniform` or `maze`
    #[arg(short = 't', long = "type", default_value = "random_uniform", value_parser = parse_map_kind)]
    pub kind: MapKind,

    /// Columns (maze cells across for mazes)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Rows (maze cells down for mazes)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Obstacle probability for random-uniform maps
    #[arg(short, long, default_value_t = DEFAULT_OBSTACLE_DENSITY)]
    pub density: f64,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl MapArgs {
    /// Validated generation parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if a dimension is missing or invalid
    pub fn to_config(&self) -> Result<MapConfig> {
        let width = self.width.ok_or_else(|| {
            invalid_configuration("width", &"<missing>", &"required to generate a map")
        })?;
        let height = self.height.ok_or_else(|| {
            invalid_configuration("height", &"<missing>", &"required to generate a map")
        })?;

        let config = match self.kind {
            MapKind::RandomUniform => {
                MapConfig::random_uniform(width, height, self.density, self.seed)
            }
            MapKind::Maze => MapConfig::maze(width, height, self.seed),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Single planning query flags
#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Planner to run
    #[arg(short, long, value_enum, default_value_t = PlannerKind::AStar)]
    pub planner: PlannerKind,

    /// Heuristic for A* (octile when omitted)
    #[arg(long, value_enum)]
    pub heuristic: Option<Heuristic>,

    /// Grid record to plan on instead of generating one
    #[arg(short, long, value_name = "GRID_JSON")]
    pub map: Option<PathBuf>,

    /// Generation flags, used when no grid file is given
    #[command(flatten)]
    pub map_args: MapArgs,

    /// Start point as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub start: Point,

    /// Goal point as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub goal: Point,

    /// Give up after expanding this many cells
    #[arg(long)]
    pub max_expansions: Option<usize>,
}

/// Benchmark flags
#[derive(Args, Debug, Clone)]
pub struct BenchmarkArgs {
    /// Benchmark configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse a `MapKind` flag value
///
/// # Errors
///
/// Returns a message naming the accepted values
pub fn parse_map_kind(value: &str) -> std::result::Result<MapKind, String> {
    value.parse::<MapKind>().map_err(|error| error.to_string())
}

/// Parse an `x,y` point
///
/// # Errors
///
/// Returns a message if the value is not two comma-separated numbers
pub fn parse_point(value: &str) -> std::result::Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected 'x,y', got '{value}'"))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|error| format!("invalid x coordinate '{x}': {error}"))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|error| format!("invalid y coordinate '{y}': {error}"))?;
    Ok(Point::new(x, y))
}

/// Load a grid record from disk
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, otherwise as
/// [`OccupancyGrid::from_json`]
pub fn load_grid(path: &Path) -> Result<OccupancyGrid> {
    let json =
        std::fs::read_to_string(path).map_err(|error| file_system_error(path, "read", error))?;
    OccupancyGrid::from_json(&json)
}

/// Executes a parsed command line
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the command and print its JSON output
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, grid loading or encoding fails
    #[allow(clippy::print_stdout)]
    pub fn execute(&self) -> Result<()> {
        let output = self.render()?;
        println!("{output}");
        Ok(())
    }

    /// Run the command and return its JSON output
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, grid loading or encoding fails
    pub fn render(&self) -> Result<String> {
        match &self.cli.command {
            Command::Generate(args) => {
                let grid = generate(&args.to_config()?)?;
                self.encode(&grid)
            }
            Command::Solve(args) => {
                let grid = match &args.map {
                    Some(path) => load_grid(path)?,
                    None => generate(&args.map_args.to_config()?)?,
                };
                let planner = Planner::from_kind(args.planner, args.heuristic);
                let limits = args
                    .max_expansions
                    .map_or(SearchLimits::unbounded(), SearchLimits::with_max_expansions);
                let outcome = planner.solve_with_limits(&grid, args.start, args.goal, limits);
                self.encode(&outcome)
            }
            Command::Benchmark(args) => {
                let config = BenchmarkConfig::load(&args.config)?;
                let mut runner = BenchmarkRunner::new(config, !args.quiet);
                let results = runner.run()?;
                self.encode(&BenchmarkReport { results })
            }
        }
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}
