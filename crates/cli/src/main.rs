mod input;
mod output;
mod provenance;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use postman::api::{
    draw_islands, solve_with_cfg, IslandsCfg, ReplayToken, SolverCfg, VertexCount,
    DEFAULT_MAX_ITERATIONS,
};
use serde_json::json;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Route inspection (Chinese Postman) solver")]
struct Cmd {
    /// Log per-iteration diagnostics
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a graph and write the circuits as JSON (plus provenance sidecar)
    Solve {
        /// Edge table (.csv or .parquet): id1,id2,weight[,aux1,aux2]
        #[arg(long)]
        edges: PathBuf,
        /// Optional vertex table: id[,x,y]
        #[arg(long)]
        vertices: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
        max_iterations: usize,
    },
    /// Write a random island graph as vertices.csv and edges.csv
    Generate {
        #[arg(long, default_value_t = 1)]
        islands: usize,
        #[arg(long, default_value_t = 8)]
        vertices_per_island: usize,
        #[arg(long, default_value_t = 4)]
        extra_edges: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Permute vertex ids across islands
        #[arg(long)]
        shuffle_ids: bool,
        #[arg(long)]
        out_dir: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Solve {
            edges,
            vertices,
            out,
            max_iterations,
        } => run_solve(&edges, vertices.as_deref(), &out, max_iterations),
        Action::Generate {
            islands,
            vertices_per_island,
            extra_edges,
            seed,
            index,
            shuffle_ids,
            out_dir,
        } => {
            let cfg = IslandsCfg {
                islands,
                vertices_per_island: VertexCount::Fixed(vertices_per_island),
                extra_edges,
                shuffle_ids,
                ..IslandsCfg::default()
            };
            generate(cfg, ReplayToken { seed, index }, &out_dir)
        }
        Action::Report => report(),
    }
}

fn run_solve(edges: &Path, vertices: Option<&Path>, out: &Path, max_iterations: usize) -> Result<()> {
    tracing::info!(edges = %edges.display(), out = %out.display(), max_iterations, "solve");
    let graph = input::load_graph(edges, vertices)?;
    let solution = solve_with_cfg(&graph, SolverCfg { max_iterations })
        .with_context(|| format!("solving {}", edges.display()))?;

    let doc = output::SolutionOut::new(&graph, &solution);
    provenance::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(
        subgraphs = solution.len(),
        total_weight = solution.total_weight(),
        out = %out.display(),
        "solution_written"
    );

    let mut payload = Payload::new(json!({ "max_iterations": max_iterations })).with_input(edges);
    if let Some(v) = vertices {
        payload = payload.with_input(v);
    }
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn generate(cfg: IslandsCfg, tok: ReplayToken, out_dir: &Path) -> Result<()> {
    tracing::info!(islands = cfg.islands, seed = tok.seed, index = tok.index, "generate");
    let graph = draw_islands(cfg, tok);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let (mut vdf, mut edf) = input::graph_frames(&graph)?;
    let vpath = out_dir.join("vertices.csv");
    let epath = out_dir.join("edges.csv");
    input::write_csv(&mut vdf, &vpath)?;
    input::write_csv(&mut edf, &epath)?;

    let payload = Payload::new(json!({
        "islands": cfg.islands,
        "vertices_per_island": format!("{:?}", cfg.vertices_per_island),
        "extra_edges": cfg.extra_edges,
        "shuffle_ids": cfg.shuffle_ids,
        "seed": tok.seed,
        "index": tok.index,
    }));
    provenance::write_sidecar(&epath, payload)?;
    tracing::info!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "instance_written"
    );
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new(json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
