use clap::ValueEnum;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::algorithm::heuristic::Heuristic;
use crate::algorithm::search::{PlanOutcome, SearchLimits, best_first};
use crate::spatial::{OccupancyGrid, Point};

/// Planner family as named in configuration records and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PlannerKind {
    /// Heuristic-guided search
    #[serde(rename = "astar")]
    #[value(name = "astar")]
    AStar,
    /// Uniform-cost search
    #[serde(rename = "dijkstra")]
    #[value(name = "dijkstra")]
    Dijkstra,
}

impl PlannerKind {
    /// Name used in records and summaries
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for PlannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Grid planner selecting the frontier key policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Planner {
    /// Key is cost-so-far
    Dijkstra,
    /// Key is cost-so-far plus a heuristic estimate to the goal
    AStar {
        /// Cost-to-go estimate
        heuristic: Heuristic,
    },
}

impl Default for Planner {
    fn default() -> Self {
        Self::astar()
    }
}

impl Planner {
    /// Dijkstra's algorithm
    pub const fn dijkstra() -> Self {
        Self::Dijkstra
    }

    /// A* with the octile heuristic
    pub const fn astar() -> Self {
        Self::AStar {
            heuristic: Heuristic::Octile,
        }
    }

    /// A* with a chosen heuristic
    pub const fn astar_with(heuristic: Heuristic) -> Self {
        Self::AStar { heuristic }
    }

    /// Planner for a configured kind; the heuristic is ignored by Dijkstra
    pub fn from_kind(kind: PlannerKind, heuristic: Option<Heuristic>) -> Self {
        match kind {
            PlannerKind::AStar => Self::astar_with(heuristic.unwrap_or_default()),
            PlannerKind::Dijkstra => Self::Dijkstra,
        }
    }

    /// Family of this planner
    pub const fn kind(&self) -> PlannerKind {
        match self {
            Self::Dijkstra => PlannerKind::Dijkstra,
            Self::AStar { .. } => PlannerKind::AStar,
        }
    }

    /// Plan a path from `start` to `goal`
    pub fn solve(&self, grid: &OccupancyGrid, start: Point, goal: Point) -> PlanOutcome {
        self.solve_with_limits(grid, start, goal, SearchLimits::unbounded())
    }

    /// Plan a path, aborting with failure once `limits` are exceeded
    pub fn solve_with_limits(
        &self,
        grid: &OccupancyGrid,
        start: Point,
        goal: Point,
        limits: SearchLimits,
    ) -> PlanOutcome {
        trace!(
            "{} solve: start=({:.2},{:.2}) goal=({:.2},{:.2}) on {}x{}",
            self.kind(),
            start.x,
            start.y,
            goal.x,
            goal.y,
            grid.width(),
            grid.height()
        );

        match *self {
            Self::Dijkstra => best_first(grid, start, goal, |_| 0.0, limits),
            Self::AStar { heuristic } => {
                let goal_cell = goal.cell();
                best_first(
                    grid,
                    start,
                    goal,
                    |cell| heuristic.estimate(cell, goal_cell),
                    limits,
                )
            }
        }
    }
}
