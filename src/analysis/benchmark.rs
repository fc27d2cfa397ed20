//! Repeated timed planner runs over generated maps
//!
//! A benchmark configuration lists experiments; each experiment generates
//! one map, runs one planner on it `repeats` times and reduces the per-run
//! metrics to a summary with 95% confidence intervals.

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

use crate::algorithm::{Heuristic, Planner, PlannerKind};
use crate::analysis::metrics::PathMetrics;
use crate::generation::{MapConfig, MapKind, generate};
use crate::io::configuration::DEFAULT_REPEATS;
use crate::io::error::{Result, file_system_error, invalid_configuration};
use crate::io::progress::ProgressManager;
use crate::math::statistics::{confidence_interval_95, mean, std_dev};
use crate::spatial::Point;

const fn default_planner() -> PlannerKind {
    PlannerKind::AStar
}

const fn default_repeats() -> usize {
    DEFAULT_REPEATS
}

/// One map, one planner, one start/goal pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experiment {
    /// Map to generate
    pub environment: MapConfig,
    /// Planner to run
    #[serde(default = "default_planner")]
    pub planner: PlannerKind,
    /// Heuristic for A* (octile when absent)
    #[serde(default)]
    pub heuristic: Option<Heuristic>,
    /// Start location
    pub start: Point,
    /// Goal location
    pub goal: Point,
    /// Number of timed runs
    #[serde(default = "default_repeats")]
    pub repeats: usize,
}

impl Experiment {
    /// Check the map parameters and repeat count
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for invalid map parameters or zero repeats
    pub fn validate(&self) -> Result<()> {
        self.environment.validate()?;
        if self.repeats == 0 {
            return Err(invalid_configuration(
                "repeats",
                &self.repeats,
                &"must be positive",
            ));
        }
        Ok(())
    }

    /// Planner described by this experiment
    pub fn planner(&self) -> Planner {
        Planner::from_kind(self.planner, self.heuristic)
    }

    /// Short human-readable description for progress output
    pub fn label(&self) -> String {
        format!(
            "{} on {} {}x{}",
            self.planner, self.environment.kind, self.environment.width, self.environment.height
        )
    }
}

/// Ordered list of experiments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkConfig {
    /// Experiments to run in order
    pub experiments: Vec<Experiment>,
}

impl BenchmarkConfig {
    /// Parse and validate a configuration from JSON
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for malformed JSON, unknown planner or
    /// map names, or any experiment failing validation
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|error| invalid_configuration("benchmark_config", &"<json>", &error))?;
        for experiment in &config.experiments {
            experiment.validate()?;
        }
        Ok(config)
    }

    /// Read and validate a configuration file
    ///
    /// # Errors
    ///
    /// Returns a file system error if the file cannot be read, otherwise as
    /// [`BenchmarkConfig::from_json`]
    pub fn load(path: &Path) -> Result<Self> {
        let json =
            std::fs::read_to_string(path).map_err(|error| file_system_error(path, "read", error))?;
        Self::from_json(&json)
    }
}

/// Aggregated results of one experiment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentSummary {
    /// Planner that was run
    pub planner: PlannerKind,
    /// Map family it ran on
    pub map_type: MapKind,
    /// Number of timed runs
    pub repeats: usize,
    /// Fraction of runs that found a path
    pub success_rate: f64,
    /// Mean path length over all runs (failed runs count as zero)
    pub mean_path_length: f64,
    /// Sample standard deviation of the path length
    pub std_path_length: f64,
    /// 95% confidence interval of the mean path length
    pub ci_path_length: (f64, f64),
    /// Mean planning time in milliseconds
    pub mean_time_ms: f64,
    /// Sample standard deviation of the planning time
    pub std_time_ms: f64,
    /// 95% confidence interval of the mean planning time
    pub ci_time_ms: (f64, f64),
    /// Mean number of expanded cells
    pub mean_nodes: f64,
    /// Mean total heading change of the returned paths
    pub mean_smoothness: f64,
}

impl ExperimentSummary {
    /// Reduce per-run metrics to a summary
    pub fn from_runs(planner: PlannerKind, map_type: MapKind, runs: &[PathMetrics]) -> Self {
        let lengths: Vec<f64> = runs.iter().map(|run| run.path_length).collect();
        let times: Vec<f64> = runs.iter().map(|run| run.computation_time_ms).collect();
        let nodes: Vec<f64> = runs.iter().map(|run| run.nodes_expanded as f64).collect();
        let smoothness: Vec<f64> = runs.iter().map(|run| run.smoothness).collect();
        let successes = runs.iter().filter(|run| run.success).count();

        let success_rate = if runs.is_empty() {
            0.0
        } else {
            successes as f64 / runs.len() as f64
        };

        Self {
            planner,
            map_type,
            repeats: runs.len(),
            success_rate,
            mean_path_length: mean(&lengths),
            std_path_length: std_dev(&lengths),
            ci_path_length: confidence_interval_95(&lengths),
            mean_time_ms: mean(&times),
            std_time_ms: std_dev(&times),
            ci_time_ms: confidence_interval_95(&times),
            mean_nodes: mean(&nodes),
            mean_smoothness: mean(&smoothness),
        }
    }
}

/// Output document of a benchmark run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    /// One summary per experiment, in configuration order
    pub results: Vec<ExperimentSummary>,
}

/// Generate the experiment's map and time its planner `repeats` times
///
/// `on_repeat` is called with the number of completed runs after each run.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the experiment fails validation
pub fn run_experiment<F>(experiment: &Experiment, mut on_repeat: F) -> Result<ExperimentSummary>
where
    F: FnMut(usize),
{
    experiment.validate()?;

    let grid = generate(&experiment.environment)?;
    let planner = experiment.planner();

    let mut runs = Vec::with_capacity(experiment.repeats);
    for repeat in 1..=experiment.repeats {
        let started = Instant::now();
        let outcome = planner.solve(&grid, experiment.start, experiment.goal);
        runs.push(PathMetrics::collect(&outcome, started.elapsed()));
        on_repeat(repeat);
    }

    Ok(ExperimentSummary::from_runs(
        experiment.planner,
        experiment.environment.kind,
        &runs,
    ))
}

/// Runs every experiment of a configuration with optional progress display
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    progress_manager: Option<ProgressManager>,
}

impl BenchmarkRunner {
    /// Create a runner, showing progress bars when `show_progress` is set
    pub fn new(config: BenchmarkConfig, show_progress: bool) -> Self {
        let progress_manager = show_progress.then(ProgressManager::new);
        Self {
            config,
            progress_manager,
        }
    }

    /// Run all experiments in order
    ///
    /// # Errors
    ///
    /// Returns the first experiment validation error encountered
    pub fn run(&mut self) -> Result<Vec<ExperimentSummary>> {
        let experiments = &self.config.experiments;

        if let Some(pm) = self.progress_manager.as_mut() {
            pm.initialize(experiments.len());
        }
        let progress = self.progress_manager.as_ref();

        let mut summaries = Vec::with_capacity(experiments.len());
        for (index, experiment) in experiments.iter().enumerate() {
            if let Some(pm) = progress {
                pm.start_experiment(index, &experiment.label(), experiment.repeats);
            }

            let summary = run_experiment(experiment, |repeat| {
                if let Some(pm) = progress {
                    pm.update_repeat(index, repeat);
                }
            })?;

            info!(
                "{}: success rate {:.2}, mean length {:.3}, mean nodes {:.1}, mean time {:.3} ms",
                experiment.label(),
                summary.success_rate,
                summary.mean_path_length,
                summary.mean_nodes,
                summary.mean_time_ms
            );

            if let Some(pm) = progress {
                pm.complete_experiment(index);
            }
            summaries.push(summary);
        }

        if let Some(pm) = progress {
            pm.finish();
        }

        Ok(summaries)
    }
}
