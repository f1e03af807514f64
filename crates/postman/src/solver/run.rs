//! Solver loop: augment, extract, detect leftovers, repeat.

use std::time::Instant;

use crate::graph::{Circuit, Graph};

use super::detect::partition;
use super::types::{IterationReport, Solution, SolveError, SolverCfg};

/// Solve the route inspection problem on `graph` with default settings.
///
/// Returns one closed walk per connected component with edges, keyed by
/// 1-based subgraph index, together with its weight. `graph` is not modified.
pub fn solve(graph: &Graph) -> Result<Solution, SolveError> {
    solve_with_cfg(graph, SolverCfg::default())
}

/// Same as [`solve`] with an explicit configuration.
pub fn solve_with_cfg(graph: &Graph, cfg: SolverCfg) -> Result<Solution, SolveError> {
    let start = Instant::now();
    let result = SolverLoop::new(cfg).run(graph);
    tracing::info!(
        runtime_s = start.elapsed().as_secs_f64(),
        ok = result.is_ok(),
        "solve_runtime"
    );
    result
}

/// Outcome of one decomposition iteration.
struct Step {
    circuit: Circuit,
    report: IterationReport,
    /// Remaining working graph; `None` when nothing is left.
    next: Option<Graph>,
}

/// Loop runner carrying the configuration.
struct SolverLoop {
    cfg: SolverCfg,
}

impl SolverLoop {
    fn new(cfg: SolverCfg) -> Self {
        Self { cfg }
    }

    fn run(&self, graph: &Graph) -> Result<Solution, SolveError> {
        let mut working = graph.clone();
        let removed = working.clean_data();
        tracing::debug!(removed, edges = working.num_edges(), "clean_data");

        let mut solution = Solution::default();
        if working.is_edgeless() {
            tracing::info!(subgraphs = 0, "computation_over");
            return Ok(solution);
        }

        let mut index = 1;
        loop {
            let step = self.step(index, working)?;
            solution.record(step.circuit, step.report);
            match step.next {
                None => {
                    tracing::info!(
                        subgraphs = solution.len(),
                        total_weight = solution.total_weight(),
                        "computation_over"
                    );
                    return Ok(solution);
                }
                Some(next) => working = next,
            }
            index += 1;
            if index > self.cfg.max_iterations {
                tracing::error!(
                    limit = self.cfg.max_iterations,
                    "decomposition_limit_exceeded"
                );
                return Err(SolveError::DecompositionLimitExceeded {
                    limit: self.cfg.max_iterations,
                });
            }
        }
    }

    /// One iteration on `working`; consumes it and returns the next state.
    fn step(&self, index: usize, mut working: Graph) -> Result<Step, SolveError> {
        let odd = working.odd_vertices();
        let mut paths_added = 0;
        let mut edges_added = 0;
        let mut added_weight = 0.0;
        if !odd.is_empty() {
            let paths = working.shortest_paths(&odd)?;
            paths_added = paths.len();
            added_weight = paths.iter().map(|p| p.length).sum();
            edges_added = working.add_edges(paths.into_iter().flat_map(|p| p.edges))?;
        }

        let circuit = working.eulerian_circuit()?;
        let circuit_weight = working.circuit_weight(&circuit);
        let rest = partition(&working, &circuit);

        let report = IterationReport {
            index,
            odd_vertices: odd.len(),
            paths_added,
            edges_added,
            added_weight,
            working_edges: working.num_edges(),
            circuit_weight,
            remaining_edges: rest.num_edges(),
        };
        tracing::debug!(
            index,
            odd = report.odd_vertices,
            paths = paths_added,
            added_weight,
            circuit_len = circuit.len(),
            circuit_weight,
            remaining = report.remaining_edges,
            "iteration"
        );
        let next = if rest.is_edgeless() { None } else { Some(rest) };
        Ok(Step {
            circuit,
            report,
            next,
        })
    }
}
