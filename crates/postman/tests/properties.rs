//! Property tests over generated island graphs.

use std::collections::BTreeSet;

use postman::api::*;
use proptest::prelude::*;

fn cleaned(g: &Graph) -> Graph {
    let mut g = g.clone();
    g.clean_data();
    g
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn connected_graph_yields_one_closed_covering_walk(
        seed in any::<u64>(),
        n in 2usize..30,
        extra in 0usize..20,
    ) {
        let g = draw_connected(n, extra, ReplayToken { seed, index: 0 });
        let base = cleaned(&g);
        let sol = solve(&g).unwrap();
        prop_assert_eq!(sol.len(), 1);

        let c = &sol.circuits()[&1];
        let it = &sol.iterations()[0];
        prop_assert!(c.is_closed());
        prop_assert_eq!(c.len(), base.num_edges() + it.edges_added);
        for e in base.edges() {
            prop_assert!(c.edges.contains(e), "edge {}-{} not walked", e.a, e.b);
        }

        let expected = base.total_weight() + it.added_weight;
        prop_assert!((sol.weights()[&1] - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    #[test]
    fn islands_give_one_entry_each_and_partition_vertices(
        seed in any::<u64>(),
        islands in 1usize..6,
        extra in 0usize..6,
    ) {
        let cfg = IslandsCfg {
            islands,
            vertices_per_island: VertexCount::Uniform { min: 2, max: 12 },
            extra_edges: extra,
            shuffle_ids: true,
            ..IslandsCfg::default()
        };
        let g = draw_islands(cfg, ReplayToken { seed, index: 1 });
        let sol = solve(&g).unwrap();
        prop_assert_eq!(sol.len(), islands);

        let mut seen: BTreeSet<VertexId> = BTreeSet::new();
        for c in sol.circuits().values() {
            let vs: BTreeSet<VertexId> = c.vertices.iter().copied().collect();
            prop_assert!(seen.is_disjoint(&vs));
            seen.extend(vs);
        }
        let all: BTreeSet<VertexId> = g.vertices().map(|v| v.id).collect();
        prop_assert_eq!(seen, all);
    }

    #[test]
    fn clean_data_is_idempotent(seed in any::<u64>(), n in 2usize..20) {
        let mut g = draw_connected(n, 5, ReplayToken { seed, index: 2 });
        let copies = g.edges().to_vec();
        g.add_edges(copies).unwrap();
        g.clean_data();
        let once = g.clone();
        prop_assert_eq!(g.clean_data(), 0);
        prop_assert_eq!(g, once);
    }

    #[test]
    fn all_even_graph_gets_no_augmentation(seed in any::<u64>(), n in 2usize..20) {
        let mut g = cleaned(&draw_connected(n, 3, ReplayToken { seed, index: 3 }));
        // Doubling every edge (distinct aux so dedup keeps them) makes all degrees even.
        let doubled: Vec<Edge> = g.edges().iter().cloned().map(|e| e.with_aux([-1.0, -1.0])).collect();
        g.add_edges(doubled).unwrap();
        prop_assert!(g.odd_vertices().is_empty());

        let sol = solve(&g).unwrap();
        prop_assert_eq!(sol.len(), 1);
        prop_assert_eq!(sol.iterations()[0].edges_added, 0);
        let expected = g.total_weight();
        prop_assert!((sol.weights()[&1] - expected).abs() <= 1e-9 * expected.max(1.0));
    }
}
