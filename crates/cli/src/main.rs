use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gabriel::api::{
    draw_points, Euclidean, GabrielCfg, GabrielGraph, Point, ReplayToken, SampleCfg,
    SampleLayout, SpadeDelaunay,
};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "gabriel")]
#[command(about = "Delaunay triangulations and Gabriel graphs of planar point sets")]
struct Cmd {
    /// Optional free-form label; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the Gabriel graph and write points, simplices and both edge sets as JSON
    Gabriel {
        /// CSV with `x`,`y` header columns
        #[arg(long, conflicts_with = "random")]
        input: Option<PathBuf>,
        /// Draw this many random points instead of reading a CSV
        #[arg(long)]
        random: Option<usize>,
        #[command(flatten)]
        sampler: SamplerArgs,
        /// Evaluate triangles in parallel
        #[arg(long)]
        parallel: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a reproducible random point cloud as CSV
    Sample {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[command(flatten)]
        sampler: SamplerArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Copy, Debug)]
struct SamplerArgs {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long, value_enum, default_value_t = LayoutArg::Uniform)]
    layout: LayoutArg,
    /// Grid jitter as a fraction of the cell size (grid layout only)
    #[arg(long, default_value_t = 0.5)]
    jitter: f64,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LayoutArg {
    Uniform,
    Grid,
}

impl SamplerArgs {
    fn draw(&self, count: usize) -> Result<Vec<Point>> {
        let layout = match self.layout {
            LayoutArg::Uniform => SampleLayout::Uniform,
            LayoutArg::Grid => SampleLayout::JitteredGrid {
                jitter: self.jitter,
            },
        };
        let cfg = SampleCfg {
            count,
            layout,
            ..SampleCfg::default()
        };
        let tok = ReplayToken {
            seed: self.seed,
            index: self.index,
        };
        Ok(draw_points(cfg, tok)?)
    }

    fn params(&self) -> serde_json::Value {
        json!({
            "seed": self.seed,
            "index": self.index,
            "layout": format!("{:?}", self.layout).to_lowercase(),
            "jitter": self.jitter
        })
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gabriel {
            input,
            random,
            sampler,
            parallel,
            out,
        } => gabriel(input, random, sampler, parallel, out, cmd.tag),
        Action::Sample {
            count,
            sampler,
            out,
        } => sample(count, sampler, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn gabriel(
    input: Option<PathBuf>,
    random: Option<usize>,
    sampler: SamplerArgs,
    parallel: bool,
    out: PathBuf,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = ?input, random = ?random, parallel, out = %out.display(), tag = ?tag, "gabriel");
    let points = match (&input, random) {
        (Some(path), _) => io::read_points_csv(path)?,
        (None, Some(n)) => sampler.draw(n)?,
        (None, None) => bail!("either --input <csv> or --random <count> is required"),
    };
    let graph = GabrielGraph::with_provider(
        points,
        &SpadeDelaunay,
        Euclidean,
        GabrielCfg { parallel },
    )?;
    let delaunay_edges = graph.delaunay_edges().len();
    tracing::info!(
        points = graph.points().len(),
        simplices = graph.simplices().len(),
        delaunay_edges,
        gabriel_edges = graph.gabriel_edges().len(),
        "graph_built"
    );

    io::write_json(&out, &io::GraphDump::from_graph(&graph))?;
    let payload = Payload::new(
        "gabriel",
        json!({
            "input": input.as_ref().map(|p| p.to_string_lossy().into_owned()),
            "random": random,
            "sampler": sampler.params(),
            "parallel": parallel
        }),
    )
    .with_summary(json!({
        "points": graph.points().len(),
        "simplices": graph.simplices().len(),
        "delaunay_edges": delaunay_edges,
        "gabriel_edges": graph.gabriel_edges().len()
    }))
    .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn sample(count: usize, sampler: SamplerArgs, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(count, out = %out.display(), tag = ?tag, "sample");
    let points = sampler.draw(count)?;
    io::write_points_csv(&out, &points)?;
    let payload = Payload::new("sample", json!({ "count": count, "sampler": sampler.params() }))
        .with_summary(json!({ "points": points.len() }))
        .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": gabriel::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
