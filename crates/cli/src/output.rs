//! JSON view of a solution.

use postman::api::{Graph, Solution};
use serde::Serialize;

/// One closed walk and its bookkeeping.
#[derive(Debug, Serialize)]
pub struct SubgraphOut {
    pub index: usize,
    pub weight: f64,
    pub odd_vertices: usize,
    pub edges_added: usize,
    pub added_weight: f64,
    /// Vertex ids along the walk; first equals last.
    pub circuit: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct SolutionOut {
    pub input_vertices: usize,
    pub input_edges: usize,
    pub input_weight: f64,
    pub total_weight: f64,
    pub subgraphs: Vec<SubgraphOut>,
}

impl SolutionOut {
    pub fn new(input: &Graph, solution: &Solution) -> Self {
        let subgraphs = solution
            .iterations()
            .iter()
            .map(|it| SubgraphOut {
                index: it.index,
                weight: solution.weights()[&it.index],
                odd_vertices: it.odd_vertices,
                edges_added: it.edges_added,
                added_weight: it.added_weight,
                circuit: solution.circuits()[&it.index]
                    .vertices
                    .iter()
                    .map(|v| v.0)
                    .collect(),
            })
            .collect();
        Self {
            input_vertices: input.num_vertices(),
            input_edges: input.num_edges(),
            input_weight: input.total_weight(),
            total_weight: solution.total_weight(),
            subgraphs,
        }
    }
}
