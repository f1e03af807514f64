use std::collections::BTreeSet;
use std::error::Error as _;

use super::*;
use crate::graph::{Edge, Graph, GraphError, Vertex, VertexId};

fn g(edges: &[(i64, i64, f64)]) -> Graph {
    Graph::from_edges(edges.iter().map(|&(a, b, w)| Edge::new(a, b, w))).unwrap()
}

fn vertex_set(c: &crate::graph::Circuit) -> BTreeSet<i64> {
    c.vertices.iter().map(|v| v.0).collect()
}

#[test]
fn even_four_cycle_single_entry() {
    let graph = g(&[(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0), (4, 1, 1.0)]);
    let sol = solve(&graph).unwrap();
    assert_eq!(sol.len(), 1);
    let c = &sol.circuits()[&1];
    assert!(c.is_closed());
    assert_eq!(c.len(), 4);
    assert!((sol.weights()[&1] - 4.0).abs() < 1e-12);
    // No odd vertices, so nothing was added before extraction.
    let it = &sol.iterations()[0];
    assert_eq!((it.odd_vertices, it.edges_added), (0, 0));
    assert_eq!(it.working_edges, 4);
}

#[test]
fn odd_pair_through_middle_vertex_duplicates_both_edges() {
    // A=1, B=2 odd; joined only through C=3 (w1 = 2, w2 = 3). Triangle hangs off C.
    let graph = g(&[(1, 3, 2.0), (3, 2, 3.0), (3, 4, 1.0), (4, 5, 1.0), (5, 3, 1.0)]);
    let original = graph.total_weight();
    let sol = solve(&graph).unwrap();
    assert_eq!(sol.len(), 1);
    assert!((sol.weights()[&1] - (original + 2.0 + 3.0)).abs() < 1e-12);
    let it = &sol.iterations()[0];
    assert_eq!(it.paths_added, 1);
    assert_eq!(it.edges_added, 2);
    assert!((it.added_weight - 5.0).abs() < 1e-12);
    assert_eq!(sol.circuits()[&1].len(), 7);
}

#[test]
fn two_components_give_two_entries_partitioning_vertices() {
    let graph = g(&[
        (1, 2, 1.0),
        (2, 3, 1.0),
        (3, 1, 1.0),
        (10, 11, 2.0),
        (11, 12, 2.0),
        (12, 13, 2.0),
        (13, 10, 2.0),
        (13, 14, 5.0),
    ]);
    let sol = solve(&graph).unwrap();
    assert_eq!(sol.len(), 2);
    let a = vertex_set(&sol.circuits()[&1]);
    let b = vertex_set(&sol.circuits()[&2]);
    assert!(a.is_disjoint(&b));
    let all: BTreeSet<i64> = a.union(&b).copied().collect();
    let expected: BTreeSet<i64> = graph.vertices().map(|v| v.id.0).collect();
    assert_eq!(all, expected);
    assert!((sol.weights()[&1] - 3.0).abs() < 1e-12);
    // Square plus pendant edge walked twice.
    assert!((sol.weights()[&2] - (8.0 + 10.0)).abs() < 1e-12);
    assert!((sol.total_weight() - 21.0).abs() < 1e-12);
}

#[test]
fn ids_need_not_be_contiguous_or_ordered() {
    let graph = Graph::new(
        [
            Vertex::new(100, 0.0, 0.0),
            Vertex::new(7, 1.0, 0.0),
            Vertex::new(55, 0.0, 1.0),
            Vertex::new(-3, 9.0, 9.0),
            Vertex::new(42, 9.0, 8.0),
        ],
        [
            Edge::new(-3, 42, 1.5),
            Edge::new(100, 7, 1.0),
            Edge::new(7, 55, 1.0),
            Edge::new(55, 100, 1.0),
        ],
    )
    .unwrap();
    let sol = solve(&graph).unwrap();
    assert_eq!(sol.len(), 2);
    assert_eq!(vertex_set(&sol.circuits()[&1]), BTreeSet::from([-3, 42]));
    assert!((sol.weights()[&1] - 3.0).abs() < 1e-12);
    assert_eq!(vertex_set(&sol.circuits()[&2]), BTreeSet::from([100, 7, 55]));
}

#[test]
fn edgeless_graph_gives_empty_solution() {
    let graph = Graph::new([Vertex::new(1, 0.0, 0.0), Vertex::new(2, 1.0, 1.0)], Vec::<Edge>::new())
        .unwrap();
    let sol = solve(&graph).unwrap();
    assert!(sol.is_empty());
    assert_eq!(sol.total_weight(), 0.0);
}

#[test]
fn duplicates_are_removed_before_solving() {
    let graph = g(&[(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0), (4, 1, 1.0), (2, 1, 1.0)]);
    let sol = solve(&graph).unwrap();
    assert!((sol.weights()[&1] - 4.0).abs() < 1e-12);
}

#[test]
fn caller_graph_is_not_mutated() {
    let graph = g(&[(1, 2, 1.0), (2, 1, 1.0), (2, 3, 4.0), (7, 8, 1.0)]);
    let before = graph.clone();
    let _ = solve(&graph).unwrap();
    assert_eq!(graph, before);
}

#[test]
fn iteration_cap_aborts_without_partial_result() {
    let graph = g(&[(1, 2, 1.0), (3, 4, 1.0), (5, 6, 1.0)]);
    let err = solve_with_cfg(&graph, SolverCfg { max_iterations: 2 }).unwrap_err();
    assert_eq!(err, SolveError::DecompositionLimitExceeded { limit: 2 });
    assert!(err.to_string().contains("2"));

    let ok = solve_with_cfg(&graph, SolverCfg { max_iterations: 3 }).unwrap();
    assert_eq!(ok.len(), 3);
    assert_eq!(SolverCfg::default().max_iterations, DEFAULT_MAX_ITERATIONS);
}

#[test]
fn into_parts_keys_are_one_based_and_parallel() {
    let graph = g(&[(1, 2, 1.0), (3, 4, 2.0)]);
    let (circuits, weights) = solve(&graph).unwrap().into_parts();
    assert_eq!(circuits.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(weights.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert!((weights[&2] - 4.0).abs() < 1e-12);
    assert_eq!(circuits[&2].vertices[0], VertexId(3));
}

#[test]
fn graph_errors_pass_through_with_source() {
    let err = SolveError::from(GraphError::Empty);
    assert_eq!(err, SolveError::Graph(GraphError::Empty));
    assert!(err.source().is_some());
}
