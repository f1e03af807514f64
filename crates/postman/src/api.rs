//! Curated API surface (UNSTABLE).
//!
//! Prefer these re-exports over deep module paths; the internal layout of
//! `graph` and `solver` is free to change.

// Graph storage and primitives
pub use crate::graph::{AugmentingPath, Circuit, Edge, Graph, GraphError, Vertex, VertexId};
// Random inputs
pub use crate::islands::{draw_connected, draw_islands, IslandsCfg, ReplayToken, VertexCount};
// Solver
pub use crate::solver::{
    partition, solve, solve_with_cfg, IterationReport, Solution, SolveError, SolverCfg,
    DEFAULT_MAX_ITERATIONS,
};
