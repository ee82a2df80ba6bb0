//! Point CSV input/output (polars) and JSON graph dumps (serde).

use anyhow::{anyhow, Context, Result};
use gabriel::api::{EdgeSet, GabrielGraph, Metric, Point};
use gabriel::prelude::Vec2;
use polars::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read `x`,`y` columns from a CSV with a header row. Integer columns are cast.
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => Err(anyhow!("row {row} of {} has a missing coordinate", path.display())),
        })
        .collect()
}

/// Write points as an `x,y` CSV.
pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent(path)?;
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = DataFrame::new(vec![Series::new("x".into(), xs), Series::new("y".into(), ys)])?;
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Plain-data view of a graph for external renderers.
#[derive(Debug, Serialize)]
pub struct GraphDump {
    pub points: Vec<[f64; 2]>,
    pub simplices: Vec<[usize; 3]>,
    pub delaunay_edges: Vec<[usize; 2]>,
    pub gabriel_edges: Vec<[usize; 2]>,
}

impl GraphDump {
    pub fn from_graph<M: Metric>(graph: &GabrielGraph<M>) -> Self {
        Self {
            points: graph.points().iter().map(|p| [p.x, p.y]).collect(),
            simplices: graph.simplices().to_vec(),
            delaunay_edges: pairs(&graph.delaunay_edges()),
            gabriel_edges: pairs(graph.gabriel_edges()),
        }
    }
}

fn pairs(edges: &EdgeSet) -> Vec<[usize; 2]> {
    edges.iter().map(|e| [e.a(), e.b()]).collect()
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}
