/// Priority queue of search candidates
pub mod frontier;
/// Cost-to-go estimates for A*
pub mod heuristic;
/// Path result data model
pub mod path;
/// Planner selection and entry points
pub mod planner;
/// Shared best-first relaxation routine
pub mod search;

pub use heuristic::Heuristic;
pub use path::PathResult;
pub use planner::{Planner, PlannerKind};
pub use search::{PlanOutcome, SearchLimits};
