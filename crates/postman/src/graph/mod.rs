//! Undirected weighted multigraph and the primitives the solver calls.
//!
//! Purpose
//! - Hold vertices (id-keyed, insertion-ordered) and edges (duplicates allowed).
//! - Provide the six operations the solver loop is written against:
//!   `clean_data`, `odd_vertices`, `shortest_paths`, `add_edges`,
//!   `eulerian_circuit`, `circuit_weight`.
//!
//! Layout
//! - `types.rs` (data types and `GraphError`), `ops.rs` (construction, dedup,
//!   degrees), `paths.rs` (Dijkstra and odd-vertex pairing), `euler.rs`
//!   (Hierholzer).

mod euler;
mod ops;
mod paths;
mod types;

pub use types::{AugmentingPath, Circuit, Edge, Graph, GraphError, Vertex, VertexId};
