//! Route inspection (Chinese Postman) on weighted undirected graphs.
//!
//! Given a graph, produce one closed walk per connected component that
//! traverses every edge at least once, duplicating shortest paths between
//! odd-degree vertices to make the walk exist.
//!
//! Modules
//! - `graph`: multigraph storage and the primitives the solver calls.
//! - `solver`: the decomposition loop and leftover detection.
//! - `islands`: reproducible random inputs for tests, benches and the CLI.
//!
//! API Policy
//! - `api` is the curated surface for callers; module paths may move.

pub mod api;
pub mod graph;
pub mod islands;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use graph::{Circuit, Edge, Graph, GraphError, Vertex, VertexId};
pub use solver::{solve, solve_with_cfg, Solution, SolveError, SolverCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::graph::{AugmentingPath, Circuit, Edge, Graph, GraphError, Vertex, VertexId};
    pub use crate::islands::{draw_connected, draw_islands, IslandsCfg, ReplayToken, VertexCount};
    pub use crate::solver::{solve, solve_with_cfg, IterationReport, Solution, SolveError, SolverCfg};
    pub use nalgebra::Vector2 as Vec2;
}
