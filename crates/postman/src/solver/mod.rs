//! Route inspection solver with iterative decomposition.
//!
//! Purpose
//! - Turn a weighted undirected graph into one closed walk per connected
//!   component that traverses every edge at least once.
//!
//! Algorithm
//! - Deduplicate the input once (on a private copy).
//! - Per iteration: pair odd vertices along shortest paths, duplicate those
//!   path edges, extract an Eulerian circuit from the first edge's component,
//!   weigh it, then keep only the edges the circuit never touched.
//! - Stop when nothing is left; abort past `SolverCfg::max_iterations`.
//!
//! Layout
//! - `types.rs` (config, `Solution`, `SolveError`), `run.rs` (loop),
//!   `detect.rs` (leftover-graph construction).

mod detect;
mod run;
mod types;

pub use detect::partition;
pub use run::{solve, solve_with_cfg};
pub use types::{IterationReport, Solution, SolveError, SolverCfg, DEFAULT_MAX_ITERATIONS};

#[cfg(test)]
mod tests;
