//! Tabular graph I/O (CSV or Parquet) via Polars.
//!
//! Edge tables: `id1,id2,weight` plus optional `aux1,aux2`.
//! Vertex tables: `id` plus optional `x,y`.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use postman::api::{Edge, Graph, Vertex};

/// Read a whole table; the format is chosen by file extension.
pub fn read_frame(path: &Path) -> Result<DataFrame> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let lf = match ext {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        "parquet" | "pq" => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        other => bail!("unsupported table format {other:?} for {}", path.display()),
    };
    lf.collect()
        .with_context(|| format!("reading {}", path.display()))
}

fn i64_column(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Int64)?;
    let values: Result<Vec<i64>> = series
        .i64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null in column {name:?} at row {row}")))
        .collect();
    values
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    let values: Result<Vec<f64>> = series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null in column {name:?} at row {row}")))
        .collect();
    values
}

/// Optional numeric column; absent columns read as zeros.
fn f64_column_or_zero(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    if df.column(name).is_ok() {
        f64_column(df, name)
    } else {
        Ok(vec![0.0; df.height()])
    }
}

pub fn edges_from_frame(df: &DataFrame) -> Result<Vec<Edge>> {
    let a = i64_column(df, "id1")?;
    let b = i64_column(df, "id2")?;
    let w = f64_column(df, "weight")?;
    let aux1 = f64_column_or_zero(df, "aux1")?;
    let aux2 = f64_column_or_zero(df, "aux2")?;
    Ok((0..df.height())
        .map(|i| Edge::new(a[i], b[i], w[i]).with_aux([aux1[i], aux2[i]]))
        .collect())
}

pub fn vertices_from_frame(df: &DataFrame) -> Result<Vec<Vertex>> {
    let ids = i64_column(df, "id")?;
    let xs = f64_column_or_zero(df, "x")?;
    let ys = f64_column_or_zero(df, "y")?;
    Ok((0..df.height())
        .map(|i| Vertex::new(ids[i], xs[i], ys[i]))
        .collect())
}

/// Load a graph; without a vertex table the vertices come from edge endpoints.
pub fn load_graph(edges: &Path, vertices: Option<&Path>) -> Result<Graph> {
    let edge_rows = edges_from_frame(&read_frame(edges)?)
        .with_context(|| format!("parsing edges from {}", edges.display()))?;
    let graph = match vertices {
        Some(vpath) => {
            let vertex_rows = vertices_from_frame(&read_frame(vpath)?)
                .with_context(|| format!("parsing vertices from {}", vpath.display()))?;
            Graph::new(vertex_rows, edge_rows)?
        }
        None => Graph::from_edges(edge_rows)?,
    };
    tracing::info!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "graph_loaded"
    );
    Ok(graph)
}

/// Vertex and edge tables for `graph`, in the layout `load_graph` reads.
pub fn graph_frames(graph: &Graph) -> Result<(DataFrame, DataFrame)> {
    let ids: Vec<i64> = graph.vertices().map(|v| v.id.0).collect();
    let xs: Vec<f64> = graph.vertices().map(|v| v.pos.x).collect();
    let ys: Vec<f64> = graph.vertices().map(|v| v.pos.y).collect();
    let vertices = df!("id" => ids, "x" => xs, "y" => ys)?;

    let es = graph.edges();
    let id1: Vec<i64> = es.iter().map(|e| e.a.0).collect();
    let id2: Vec<i64> = es.iter().map(|e| e.b.0).collect();
    let weight: Vec<f64> = es.iter().map(|e| e.weight).collect();
    let aux1: Vec<f64> = es.iter().map(|e| e.aux[0]).collect();
    let aux2: Vec<f64> = es.iter().map(|e| e.aux[1]).collect();
    let edges = df!(
        "id1" => id1,
        "id2" => id2,
        "weight" => weight,
        "aux1" => aux1,
        "aux2" => aux2
    )?;
    Ok((vertices, edges))
}

pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
