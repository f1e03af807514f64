//! Solve a generated multi-island graph and print one line per subgraph.
//!
//! Run: `cargo run -p postman --example islands`

use std::time::Instant;

use postman::api::{draw_islands, solve, IslandsCfg, ReplayToken, VertexCount};

fn main() {
    let cfg = IslandsCfg {
        islands: 5,
        vertices_per_island: VertexCount::Uniform { min: 4, max: 40 },
        extra_edges: 10,
        shuffle_ids: true,
        ..IslandsCfg::default()
    };
    let graph = draw_islands(cfg, ReplayToken { seed: 7, index: 0 });

    let start = Instant::now();
    let solution = solve(&graph).expect("generated islands are solvable");
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    println!(
        "vertices={} edges={} base_weight={:.6}",
        graph.num_vertices(),
        graph.num_edges(),
        graph.total_weight()
    );
    for it in solution.iterations() {
        println!(
            "subgraph={} odd={} added_edges={} added_weight={:.6} circuit_weight={:.6}",
            it.index, it.odd_vertices, it.edges_added, it.added_weight, it.circuit_weight
        );
    }
    println!("total_weight={:.6}", solution.total_weight());
    println!("solve_time_ms={elapsed_ms:.3}");
}
