//! Single-source shortest paths and greedy odd-vertex pairing.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use super::types::{AugmentingPath, Edge, Graph, GraphError, VertexId};

/// Heap entry ordered so that `BinaryHeap` pops the smallest cost first.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    cost: f64,
    node: VertexId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and predecessor edges from one source.
#[derive(Debug, Default)]
struct ShortestPathTree {
    dist: HashMap<VertexId, f64>,
    /// Edge index used to reach each vertex (absent for the source).
    pred: HashMap<VertexId, usize>,
}

impl ShortestPathTree {
    /// Edges from the source to `target`, in walking order.
    fn path_to(&self, target: VertexId, edges: &[Edge]) -> Vec<Edge> {
        let mut out = Vec::new();
        let mut cur = target;
        while let Some(&idx) = self.pred.get(&cur) {
            let e = &edges[idx];
            out.push(e.clone());
            cur = e.other(cur);
        }
        out.reverse();
        out
    }
}

impl Graph {
    /// Dijkstra from `source` over the current (undirected, multi-) edge set.
    fn dijkstra(
        &self,
        incidence: &HashMap<VertexId, Vec<usize>>,
        source: VertexId,
    ) -> ShortestPathTree {
        let mut tree = ShortestPathTree::default();
        let mut heap = BinaryHeap::new();
        tree.dist.insert(source, 0.0);
        heap.push(Frontier {
            cost: 0.0,
            node: source,
        });
        while let Some(Frontier { cost, node }) = heap.pop() {
            if tree.dist.get(&node).is_some_and(|&d| cost > d) {
                continue;
            }
            let Some(incident) = incidence.get(&node) else {
                continue;
            };
            for &idx in incident {
                let e = &self.edges[idx];
                let next = e.other(node);
                let cand = cost + e.weight;
                let better = tree.dist.get(&next).map_or(true, |&d| cand < d);
                if better {
                    tree.dist.insert(next, cand);
                    tree.pred.insert(next, idx);
                    heap.push(Frontier {
                        cost: cand,
                        node: next,
                    });
                }
            }
        }
        tree
    }

    /// Pair up `odd` vertices along shortest paths.
    ///
    /// Greedy: the first unpaired vertex is matched with its nearest unpaired
    /// reachable partner (ties go to the earlier one in `odd`), repeated until
    /// none remain. Adding every returned path's edges flips the parity of
    /// exactly the paired endpoints. The result is not a minimum-weight
    /// perfect matching in general.
    ///
    /// Distances are measured on the graph as it is now; the caller adds the
    /// returned edges afterwards.
    pub fn shortest_paths(&self, odd: &[VertexId]) -> Result<Vec<AugmentingPath>, GraphError> {
        let incidence = self.incidence();
        let mut unpaired: VecDeque<VertexId> = odd.iter().copied().collect();
        let mut paths = Vec::with_capacity(odd.len() / 2);
        while let Some(source) = unpaired.pop_front() {
            let tree = self.dijkstra(&incidence, source);
            let nearest = unpaired
                .iter()
                .enumerate()
                .filter_map(|(pos, v)| tree.dist.get(v).map(|&d| (pos, d)))
                .min_by(|x, y| x.1.total_cmp(&y.1));
            let Some((pos, length)) = nearest else {
                return Err(GraphError::Unpairable { vertex: source });
            };
            let Some(target) = unpaired.remove(pos) else {
                return Err(GraphError::Unpairable { vertex: source });
            };
            let edges = tree.path_to(target, &self.edges);
            tracing::trace!(%source, %target, length, hops = edges.len(), "pair");
            paths.push(AugmentingPath {
                from: source,
                to: target,
                length,
                edges,
            });
        }
        Ok(paths)
    }
}
