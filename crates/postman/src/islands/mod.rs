//! Random "island" graphs (edge-disjoint connected components) with replay tokens.
//!
//! Purpose
//! - Provide a small, deterministic source of solver inputs for property
//!   tests, benches and the CLI `generate` command.
//!
//! Model
//! - Each island gets `n` vertices at uniform positions in a unit square,
//!   shifted right by `island * spacing` so islands never overlap.
//! - A random spanning tree (vertex `k` attaches to a uniform earlier vertex)
//!   keeps each island connected; `extra_edges` random chords add cycles and
//!   parallel edges. Weights are Euclidean lengths.
//! - Ids are contiguous from `first_id` unless `shuffle_ids` is set, in which
//!   case the same id range is permuted across the whole graph.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use indexmap::IndexMap;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph::{Edge, Graph, Vertex, VertexId};

/// Vertex count distribution per island.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(2),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(2);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Island sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct IslandsCfg {
    /// Number of edge-disjoint components. At least one is drawn.
    pub islands: usize,
    pub vertices_per_island: VertexCount,
    /// Random chords per island on top of the spanning tree.
    pub extra_edges: usize,
    /// Horizontal offset between island origins.
    pub spacing: f64,
    pub first_id: i64,
    pub shuffle_ids: bool,
}

impl Default for IslandsCfg {
    fn default() -> Self {
        Self {
            islands: 1,
            vertices_per_island: VertexCount::Fixed(8),
            extra_edges: 4,
            spacing: 2.0,
            first_id: 1,
            shuffle_ids: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a graph made of `cfg.islands` connected components.
pub fn draw_islands(cfg: IslandsCfg, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let islands = cfg.islands.max(1);
    let sizes: Vec<usize> = (0..islands)
        .map(|_| cfg.vertices_per_island.sample(&mut rng))
        .collect();
    let total: usize = sizes.iter().sum();

    let mut ids: Vec<VertexId> = (0..total as i64).map(|k| VertexId(cfg.first_id + k)).collect();
    if cfg.shuffle_ids {
        ids.shuffle(&mut rng);
    }

    let mut vertices = IndexMap::with_capacity(total);
    let mut edges = Vec::new();
    let mut offset = 0;
    for (island, &n) in sizes.iter().enumerate() {
        let shift = Vector2::new(island as f64 * cfg.spacing, 0.0);
        let local = &ids[offset..offset + n];
        let pos: Vec<Vector2<f64>> = (0..n)
            .map(|_| shift + Vector2::new(rng.gen::<f64>(), rng.gen::<f64>()))
            .collect();
        for (&id, &p) in local.iter().zip(pos.iter()) {
            vertices.insert(id, Vertex { id, pos: p });
        }
        let link = |i: usize, j: usize| Edge {
            a: local[i],
            b: local[j],
            weight: (pos[i] - pos[j]).norm(),
            aux: [island as f64, 0.0],
        };
        for k in 1..n {
            let parent = rng.gen_range(0..k);
            edges.push(link(k, parent));
        }
        for _ in 0..cfg.extra_edges {
            let i = rng.gen_range(0..n);
            let j = (i + rng.gen_range(1..n)) % n;
            edges.push(link(i, j));
        }
        offset += n;
    }
    Graph::from_parts_unchecked(vertices, edges)
}

/// Draw a single connected graph with `n` vertices and `extra_edges` chords.
pub fn draw_connected(n: usize, extra_edges: usize, tok: ReplayToken) -> Graph {
    draw_islands(
        IslandsCfg {
            islands: 1,
            vertices_per_island: VertexCount::Fixed(n),
            extra_edges,
            ..IslandsCfg::default()
        },
        tok,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = IslandsCfg {
            islands: 3,
            vertices_per_island: VertexCount::Uniform { min: 3, max: 9 },
            shuffle_ids: true,
            ..IslandsCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(draw_islands(cfg, tok), draw_islands(cfg, tok));
        let other = draw_islands(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(draw_islands(cfg, tok), other);
    }

    #[test]
    fn edge_count_and_ids() {
        let cfg = IslandsCfg {
            islands: 4,
            vertices_per_island: VertexCount::Fixed(5),
            extra_edges: 2,
            first_id: 10,
            ..IslandsCfg::default()
        };
        let g = draw_islands(cfg, ReplayToken { seed: 1, index: 0 });
        assert_eq!(g.num_vertices(), 20);
        // Spanning tree (n - 1) plus chords, per island.
        assert_eq!(g.num_edges(), 4 * (4 + 2));
        let ids: Vec<i64> = g.vertices().map(|v| v.id.0).collect();
        assert_eq!(ids, (10..30).collect::<Vec<_>>());
        assert!(g.edges().iter().all(|e| e.weight >= 0.0 && !e.is_loop()));
    }

    #[test]
    fn islands_do_not_share_edges() {
        let cfg = IslandsCfg {
            islands: 3,
            shuffle_ids: true,
            ..IslandsCfg::default()
        };
        let g = draw_islands(cfg, ReplayToken { seed: 9, index: 3 });
        for e in g.edges() {
            let island = e.aux[0];
            let xa = g.vertex(e.a).unwrap().pos.x;
            let xb = g.vertex(e.b).unwrap().pos.x;
            assert!(xa >= island * cfg.spacing && xa < island * cfg.spacing + 1.0);
            assert!(xb >= island * cfg.spacing && xb < island * cfg.spacing + 1.0);
        }
    }
}
