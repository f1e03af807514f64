//! Data types for the route-inspection graph.
//!
//! Kept small and explicit to make `ops`, `paths` and `euler` easy to read.

use std::fmt;

use indexmap::IndexMap;
use nalgebra::Vector2;

/// Vertex identifier as it appears in the input data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub i64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vertex record. The position is payload only; the solver never reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub pos: Vector2<f64>,
}

impl Vertex {
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self {
            id: VertexId(id),
            pos: Vector2::new(x, y),
        }
    }

    pub fn at_origin(id: VertexId) -> Self {
        Self {
            id,
            pos: Vector2::zeros(),
        }
    }
}

/// Undirected weighted edge `a -- b`.
///
/// `aux` holds two bookkeeping fields from the input format. They are carried
/// through deduplication, duplication and filtering untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub weight: f64,
    pub aux: [f64; 2],
}

impl Edge {
    pub fn new(a: i64, b: i64, weight: f64) -> Self {
        Self {
            a: VertexId(a),
            b: VertexId(b),
            weight,
            aux: [0.0, 0.0],
        }
    }

    pub fn with_aux(mut self, aux: [f64; 2]) -> Self {
        self.aux = aux;
        self
    }

    #[inline]
    pub fn touches(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }

    /// Endpoint opposite to `v`. For a self-loop this is `v` itself.
    #[inline]
    pub fn other(&self, v: VertexId) -> VertexId {
        if self.a == v {
            self.b
        } else {
            self.a
        }
    }

    #[inline]
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    /// Identity used by `Graph::clean_data`: unordered endpoints, exact weight and aux bits.
    pub(crate) fn dedup_key(&self) -> (VertexId, VertexId, u64, [u64; 2]) {
        let (lo, hi) = if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        };
        (
            lo,
            hi,
            self.weight.to_bits(),
            [self.aux[0].to_bits(), self.aux[1].to_bits()],
        )
    }
}

/// Undirected multigraph with id-keyed vertices.
///
/// Invariants (enforced by constructors and `add_edges`):
/// - every edge endpoint names a vertex in `vertices`;
/// - every weight is finite and non-negative.
///
/// Vertex order is insertion order and is what `odd_vertices` reports in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub(crate) vertices: IndexMap<VertexId, Vertex>,
    pub(crate) edges: Vec<Edge>,
}

/// Closed walk: `vertices[0] == vertices[last]` and `edges[i]` joins
/// `vertices[i]` and `vertices[i + 1]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Circuit {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<Edge>,
}

impl Circuit {
    /// Number of traversed edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }
}

/// Path added to fix the parity of `from` and `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct AugmentingPath {
    pub from: VertexId,
    pub to: VertexId,
    pub length: f64,
    /// Edges along the path, in order from `from` to `to`.
    pub edges: Vec<Edge>,
}

/// Errors surfaced by graph construction and the graph primitives.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphError {
    /// An edge names a vertex that is not in the graph.
    UnknownVertex { id: VertexId },
    /// The same vertex id was given twice.
    DuplicateVertex { id: VertexId },
    /// Weight is NaN, infinite or negative.
    InvalidWeight { a: VertexId, b: VertexId, weight: f64 },
    /// Eulerian extraction needs every degree even.
    OddDegree { vertices: Vec<VertexId> },
    /// No other odd vertex is reachable from this one.
    Unpairable { vertex: VertexId },
    /// Eulerian extraction on a graph without edges.
    Empty,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownVertex { id } => write!(f, "edge references unknown vertex {id}"),
            GraphError::DuplicateVertex { id } => write!(f, "vertex {id} given more than once"),
            GraphError::InvalidWeight { a, b, weight } => write!(
                f,
                "edge {a}-{b} has invalid weight {weight} (needs finite and >= 0)"
            ),
            GraphError::OddDegree { vertices } => write!(
                f,
                "graph is not Eulerian: {} vertices have odd degree (first: {})",
                vertices.len(),
                vertices
                    .first()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string())
            ),
            GraphError::Unpairable { vertex } => {
                write!(f, "odd vertex {vertex} has no reachable odd partner")
            }
            GraphError::Empty => write!(f, "graph has no edges"),
        }
    }
}

impl std::error::Error for GraphError {}
