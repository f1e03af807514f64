//! Eulerian circuit extraction (Hierholzer) and circuit weighting.

use std::collections::HashMap;

use super::types::{Circuit, Graph, GraphError, VertexId};

impl Graph {
    /// Closed walk using every edge of the start component exactly once.
    ///
    /// The walk starts at the first endpoint of the first edge. Edges in other
    /// components are not visited; the solver picks them up in a later
    /// decomposition iteration. Every vertex must have even degree.
    pub fn eulerian_circuit(&self) -> Result<Circuit, GraphError> {
        let Some(first) = self.edges.first() else {
            return Err(GraphError::Empty);
        };
        let odd = self.odd_vertices();
        if !odd.is_empty() {
            return Err(GraphError::OddDegree { vertices: odd });
        }
        let incidence = self.incidence();
        let mut used = vec![false; self.edges.len()];
        let mut cursor: HashMap<VertexId, usize> = HashMap::with_capacity(incidence.len());

        // Stack of (vertex, edge used to arrive there).
        let mut stack: Vec<(VertexId, Option<usize>)> = vec![(first.a, None)];
        let mut vertices = Vec::with_capacity(self.edges.len() + 1);
        let mut steps = Vec::with_capacity(self.edges.len());
        while let Some(&(v, via)) = stack.last() {
            let incident = incidence.get(&v).map(Vec::as_slice).unwrap_or(&[]);
            let pos = cursor.entry(v).or_insert(0);
            while *pos < incident.len() && used[incident[*pos]] {
                *pos += 1;
            }
            if let Some(&idx) = incident.get(*pos) {
                used[idx] = true;
                stack.push((self.edges[idx].other(v), Some(idx)));
            } else {
                stack.pop();
                vertices.push(v);
                if let Some(idx) = via {
                    steps.push(idx);
                }
            }
        }
        vertices.reverse();
        steps.reverse();
        let edges = steps.into_iter().map(|idx| self.edges[idx].clone()).collect();
        Ok(Circuit { vertices, edges })
    }

    /// Total weight of the walk; duplicated edges count once per traversal.
    pub fn circuit_weight(&self, circuit: &Circuit) -> f64 {
        circuit.edges.iter().map(|e| e.weight).sum()
    }
}
