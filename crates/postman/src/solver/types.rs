//! Result, configuration and error types for the solver loop.

use std::collections::BTreeMap;
use std::fmt;

use crate::graph::{Circuit, GraphError};

/// Hard cap on decomposition iterations (one per connected component).
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolverCfg {
    /// Iteration counter limit; exceeding it aborts the solve.
    /// Keep configurable only to exercise the abort path in tests.
    pub max_iterations: usize,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Diagnostics for one decomposition iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationReport {
    /// 1-based subgraph index.
    pub index: usize,
    pub odd_vertices: usize,
    pub paths_added: usize,
    pub edges_added: usize,
    /// Sum of the weights of the duplicated edges.
    pub added_weight: f64,
    /// Edges in the working graph after augmentation.
    pub working_edges: usize,
    pub circuit_weight: f64,
    /// Edges left for the next iteration.
    pub remaining_edges: usize,
}

/// Circuits and weights per subgraph, keyed by 1-based subgraph index.
///
/// Built by the solver loop and handed out once; entries are never changed
/// after they are recorded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    circuits: BTreeMap<usize, Circuit>,
    weights: BTreeMap<usize, f64>,
    iterations: Vec<IterationReport>,
}

impl Solution {
    pub(crate) fn record(&mut self, circuit: Circuit, report: IterationReport) {
        let index = report.index;
        debug_assert!(!self.circuits.contains_key(&index));
        self.weights.insert(index, report.circuit_weight);
        self.circuits.insert(index, circuit);
        self.iterations.push(report);
    }

    pub fn circuits(&self) -> &BTreeMap<usize, Circuit> {
        &self.circuits
    }

    pub fn weights(&self) -> &BTreeMap<usize, f64> {
        &self.weights
    }

    pub fn iterations(&self) -> &[IterationReport] {
        &self.iterations
    }

    /// Number of subgraphs solved.
    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.values().sum()
    }

    /// The two parallel mappings `(index → circuit, index → weight)`.
    pub fn into_parts(self) -> (BTreeMap<usize, Circuit>, BTreeMap<usize, f64>) {
        (self.circuits, self.weights)
    }
}

/// Errors surfaced by `solve`.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// More decomposition iterations than `SolverCfg::max_iterations`.
    DecompositionLimitExceeded { limit: usize },
    /// A graph primitive refused its input; passed through unchanged.
    Graph(GraphError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::DecompositionLimitExceeded { limit } => write!(
                f,
                "more than {limit} subgraphs; decomposition did not terminate"
            ),
            SolveError::Graph(e) => write!(f, "graph operation failed: {e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Graph(e) => Some(e),
            SolveError::DecompositionLimitExceeded { .. } => None,
        }
    }
}

impl From<GraphError> for SolveError {
    fn from(e: GraphError) -> Self {
        SolveError::Graph(e)
    }
}
