//! Priority-first relaxation over the 8-connected grid graph
//!
//! Dijkstra and A* share this routine and differ only in the heuristic
//! added to the cost-so-far when computing a frontier key. Search state is
//! held in flat arrays indexed by `row * width + col` and is private to one
//! call, so concurrent searches over the same grid need no coordination.

use bitvec::prelude::*;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::frontier::{Frontier, FrontierEntry};
use crate::algorithm::path::PathResult;
use crate::io::configuration::{AXIS_COST, COST_EPSILON, DIAGONAL_COST};
use crate::spatial::collision::{line_of_sight_cells, occupied_cell};
use crate::spatial::{Cell, OccupancyGrid, Point};

/// Row delta, column delta and cost of each move
pub const MOVES: [(i64, i64, f64); 8] = [
    (-1, 0, AXIS_COST),
    (1, 0, AXIS_COST),
    (0, -1, AXIS_COST),
    (0, 1, AXIS_COST),
    (-1, -1, DIAGONAL_COST),
    (-1, 1, DIAGONAL_COST),
    (1, -1, DIAGONAL_COST),
    (1, 1, DIAGONAL_COST),
];

/// Optional bounds on a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchLimits {
    /// Abort with failure once this many cells have been expanded
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    /// No bounds
    pub const fn unbounded() -> Self {
        Self {
            max_expansions: None,
        }
    }

    /// Bound the number of expanded cells
    pub const fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

/// Path plus expansion statistics for one planning query
///
/// Serialises as `{"path": {...}, "nodes_expanded": n}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// Resulting path (empty on failure)
    pub path: PathResult,
    /// Number of cells expanded before termination
    pub nodes_expanded: usize,
}

impl PlanOutcome {
    /// Failed query after `nodes_expanded` expansions
    pub const fn failure(nodes_expanded: usize) -> Self {
        Self {
            path: PathResult::failure(),
            nodes_expanded,
        }
    }
}

/// Best-known costs and predecessors for every cell of the grid
struct SearchState {
    cost: Vec<f64>,
    predecessor: Vec<Option<usize>>,
    expanded: BitVec,
}

impl SearchState {
    fn new(cell_count: usize) -> Self {
        Self {
            cost: vec![f64::INFINITY; cell_count],
            predecessor: vec![None; cell_count],
            expanded: bitvec![0; cell_count],
        }
    }

    fn cost_of(&self, index: usize) -> f64 {
        self.cost.get(index).copied().unwrap_or(f64::INFINITY)
    }

    fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).as_deref() == Some(&true)
    }

    // A later, strictly cheaper entry for the same cell supersedes this one
    fn is_stale(&self, entry: &FrontierEntry) -> bool {
        self.is_expanded(entry.index) || entry.cost > self.cost_of(entry.index) + COST_EPSILON
    }

    fn record(&mut self, index: usize, cost: f64, predecessor: Option<usize>) {
        if let Some(slot) = self.cost.get_mut(index) {
            *slot = cost;
        }
        if let Some(slot) = self.predecessor.get_mut(index) {
            *slot = predecessor;
        }
    }

    fn mark_expanded(&mut self, index: usize) {
        if index < self.expanded.len() {
            self.expanded.set(index, true);
        }
    }

    fn trace_back(&self, grid: &OccupancyGrid, goal_index: usize) -> Vec<Point> {
        let mut states = Vec::new();
        let mut current = Some(goal_index);
        while let Some(index) = current {
            states.push(Point::from(grid.cell_at(index)));
            current = self.predecessor.get(index).copied().flatten();
        }
        states.reverse();
        states
    }
}

fn free_index(grid: &OccupancyGrid, cell: Cell) -> Option<usize> {
    if occupied_cell(grid, cell) {
        None
    } else {
        grid.index_of(cell)
    }
}

/// Shortest 8-connected path from `start` to `goal`
///
/// Frontier keys are `g + heuristic(cell)`. With a consistent heuristic the
/// first expansion of the goal yields an optimal-cost path. Occupied
/// endpoints fail immediately with zero expansions; an exhausted frontier
/// fails with the count of cells expanded so far. Each cell is expanded at
/// most once.
pub fn best_first<H>(
    grid: &OccupancyGrid,
    start: Point,
    goal: Point,
    heuristic: H,
    limits: SearchLimits,
) -> PlanOutcome
where
    H: Fn(Cell) -> f64,
{
    let start_cell = start.cell();
    let goal_cell = goal.cell();

    let Some(start_index) = free_index(grid, start_cell) else {
        debug!("start cell ({}, {}) is occupied", start_cell.row, start_cell.col);
        return PlanOutcome::failure(0);
    };
    let Some(goal_index) = free_index(grid, goal_cell) else {
        debug!("goal cell ({}, {}) is occupied", goal_cell.row, goal_cell.col);
        return PlanOutcome::failure(0);
    };

    let mut state = SearchState::new(grid.cell_count());
    let mut frontier = Frontier::new();
    state.record(start_index, 0.0, None);
    frontier.push(FrontierEntry {
        priority: heuristic(start_cell),
        cost: 0.0,
        index: start_index,
    });

    let mut nodes_expanded = 0;

    while let Some(entry) = frontier.pop() {
        if state.is_stale(&entry) {
            continue;
        }

        if limits
            .max_expansions
            .is_some_and(|limit| nodes_expanded >= limit)
        {
            debug!("expansion limit reached after {nodes_expanded} nodes");
            return PlanOutcome::failure(nodes_expanded);
        }

        state.mark_expanded(entry.index);
        nodes_expanded += 1;

        if entry.index == goal_index {
            let states = state.trace_back(grid, goal_index);
            return PlanOutcome {
                path: PathResult::from_states(states),
                nodes_expanded,
            };
        }

        let current = grid.cell_at(entry.index);
        let cost = state.cost_of(entry.index);

        for &(d_row, d_col, step) in &MOVES {
            let next = current.offset(d_row, d_col);
            let Some(next_index) = free_index(grid, next) else {
                continue;
            };
            if state.is_expanded(next_index) || !line_of_sight_cells(grid, current, next) {
                continue;
            }

            let candidate = cost + step;
            if candidate < state.cost_of(next_index) {
                state.record(next_index, candidate, Some(entry.index));
                frontier.push(FrontierEntry {
                    priority: candidate + heuristic(next),
                    cost: candidate,
                    index: next_index,
                });
            }
        }
    }

    debug!("frontier exhausted after expanding {nodes_expanded} nodes");
    PlanOutcome::failure(nodes_expanded)
}
