//! Disconnection detection: what is left after a circuit has been extracted.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::graph::{Circuit, Graph, VertexId};

/// Working graph for the next iteration.
///
/// An edge survives only if neither endpoint occurs in `circuit`. Its
/// endpoint records are carried over by id, deduplicated, in first-seen
/// order. Isolated vertices and vertices whose edges were all dropped do not
/// survive.
///
/// The endpoint rule (rather than "edge not traversed") is exact here because
/// `Graph::eulerian_circuit` walks the whole component of its start vertex:
/// any edge touching a visited vertex belongs to that component.
pub fn partition(graph: &Graph, circuit: &Circuit) -> Graph {
    let visited: HashSet<VertexId> = circuit.vertices.iter().copied().collect();
    let mut vertices = IndexMap::new();
    let mut edges = Vec::new();
    for e in graph.edges() {
        if visited.contains(&e.a) || visited.contains(&e.b) {
            continue;
        }
        for id in [e.a, e.b] {
            if let Some(v) = graph.vertex(id) {
                vertices.entry(id).or_insert_with(|| v.clone());
            }
        }
        edges.push(e.clone());
    }
    Graph::from_parts_unchecked(vertices, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Vertex};

    fn circuit_of(ids: &[i64]) -> Circuit {
        Circuit {
            vertices: ids.iter().map(|&i| VertexId(i)).collect(),
            edges: Vec::new(),
        }
    }

    #[test]
    fn keeps_untouched_component_in_first_seen_order() {
        let g = Graph::new(
            [
                Vertex::new(1, 0.0, 0.0),
                Vertex::new(2, 1.0, 0.0),
                Vertex::new(10, 5.0, 0.0),
                Vertex::new(11, 6.0, 0.0),
                Vertex::new(12, 7.0, 0.0),
            ],
            [
                Edge::new(1, 2, 1.0),
                Edge::new(12, 11, 2.0).with_aux([3.0, 4.0]),
                Edge::new(2, 1, 1.0),
                Edge::new(11, 10, 2.0),
            ],
        )
        .unwrap();
        let rest = partition(&g, &circuit_of(&[1, 2, 1]));
        assert_eq!(rest.num_edges(), 2);
        assert_eq!(rest.edges()[0].aux, [3.0, 4.0]);
        let order: Vec<i64> = rest.vertices().map(|v| v.id.0).collect();
        assert_eq!(order, vec![12, 11, 10]);
        // Payload is carried by id, not by position.
        assert_eq!(rest.vertex(VertexId(10)).unwrap().pos.x, 5.0);
    }

    #[test]
    fn drops_edge_when_either_endpoint_was_visited() {
        let g = Graph::from_edges([Edge::new(1, 2, 1.0), Edge::new(2, 3, 1.0), Edge::new(3, 4, 1.0)])
            .unwrap();
        // Only 1 and 2 visited: 2-3 goes because of 2, 3-4 stays.
        let rest = partition(&g, &circuit_of(&[1, 2, 1]));
        assert_eq!(rest.edges(), &[Edge::new(3, 4, 1.0)]);
        assert_eq!(rest.num_vertices(), 2);
    }

    #[test]
    fn nothing_left_when_circuit_covers_everything() {
        let g = Graph::from_edges([Edge::new(1, 2, 1.0), Edge::new(2, 1, 1.0)]).unwrap();
        let rest = partition(&g, &circuit_of(&[1, 2, 1]));
        assert!(rest.is_edgeless());
        assert_eq!(rest.num_vertices(), 0);
    }
}
