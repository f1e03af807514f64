//! Construction, validation and degree bookkeeping.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use super::types::{Edge, Graph, GraphError, Vertex, VertexId};

impl Graph {
    /// Build a graph from vertex records and edges, validating both.
    pub fn new<V, E>(vertices: V, edges: E) -> Result<Self, GraphError>
    where
        V: IntoIterator<Item = Vertex>,
        E: IntoIterator<Item = Edge>,
    {
        let mut map = IndexMap::new();
        for v in vertices {
            let id = v.id;
            if map.insert(id, v).is_some() {
                return Err(GraphError::DuplicateVertex { id });
            }
        }
        let mut g = Graph {
            vertices: map,
            edges: Vec::new(),
        };
        g.add_edges(edges)?;
        Ok(g)
    }

    /// Build a graph from edges alone; vertices are synthesized at the origin
    /// in first-seen endpoint order.
    pub fn from_edges<E>(edges: E) -> Result<Self, GraphError>
    where
        E: IntoIterator<Item = Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().collect();
        let mut map = IndexMap::new();
        for e in &edges {
            for id in [e.a, e.b] {
                map.entry(id).or_insert_with(|| Vertex::at_origin(id));
            }
        }
        let mut g = Graph {
            vertices: map,
            edges: Vec::with_capacity(edges.len()),
        };
        g.add_edges(edges)?;
        Ok(g)
    }

    /// Assemble without validation. Callers must uphold the `Graph` invariants.
    pub(crate) fn from_parts_unchecked(vertices: IndexMap<VertexId, Vertex>, edges: Vec<Edge>) -> Self {
        debug_assert!(edges
            .iter()
            .all(|e| vertices.contains_key(&e.a) && vertices.contains_key(&e.b)));
        Graph { vertices, edges }
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_edgeless(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of all edge weights (duplicates counted separately).
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Number of incident edge ends at `id`; a self-loop counts twice.
    pub fn degree(&self, id: VertexId) -> usize {
        self.edges
            .iter()
            .map(|e| usize::from(e.a == id) + usize::from(e.b == id))
            .sum()
    }

    fn degrees(&self) -> HashMap<VertexId, usize> {
        let mut deg = HashMap::with_capacity(self.vertices.len());
        for e in &self.edges {
            *deg.entry(e.a).or_insert(0) += 1;
            *deg.entry(e.b).or_insert(0) += 1;
        }
        deg
    }

    /// Remove duplicate edges in place, keeping the first occurrence.
    ///
    /// Two edges are duplicates when they join the same unordered pair of
    /// vertices with bit-identical weight and aux fields. Parallel edges with
    /// different weights are distinct streets and stay. Returns the number of
    /// edges removed; a second call always returns 0.
    pub fn clean_data(&mut self) -> usize {
        let before = self.edges.len();
        let mut seen = HashSet::with_capacity(before);
        self.edges.retain(|e| seen.insert(e.dedup_key()));
        before - self.edges.len()
    }

    /// Vertices with odd degree, in vertex order.
    pub fn odd_vertices(&self) -> Vec<VertexId> {
        let deg = self.degrees();
        self.vertices
            .keys()
            .copied()
            .filter(|id| deg.get(id).copied().unwrap_or(0) % 2 == 1)
            .collect()
    }

    /// Append the given edges (duplicating existing ones is the point).
    ///
    /// All edges are validated first; on error the graph is unchanged.
    pub fn add_edges<E>(&mut self, edges: E) -> Result<usize, GraphError>
    where
        E: IntoIterator<Item = Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().collect();
        for e in &edges {
            self.check_edge(e)?;
        }
        let n = edges.len();
        self.edges.extend(edges);
        Ok(n)
    }

    fn check_edge(&self, e: &Edge) -> Result<(), GraphError> {
        for id in [e.a, e.b] {
            if !self.vertices.contains_key(&id) {
                return Err(GraphError::UnknownVertex { id });
            }
        }
        if !e.weight.is_finite() || e.weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                a: e.a,
                b: e.b,
                weight: e.weight,
            });
        }
        Ok(())
    }

    /// Edge indices incident to each vertex. A self-loop appears twice in its
    /// vertex's list so both of its ends are accounted for.
    pub(crate) fn incidence(&self) -> HashMap<VertexId, Vec<usize>> {
        let mut inc: HashMap<VertexId, Vec<usize>> = HashMap::with_capacity(self.vertices.len());
        for (idx, e) in self.edges.iter().enumerate() {
            inc.entry(e.a).or_default().push(idx);
            inc.entry(e.b).or_default().push(idx);
        }
        inc
    }
}
