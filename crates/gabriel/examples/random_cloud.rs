//! Print Delaunay vs. Gabriel edge counts for a few random clouds.
//!
//! Usage:
//!   cargo run -p gabriel --example random_cloud -- uniform
//!   cargo run -p gabriel --example random_cloud -- grid

use gabriel::api::{draw_points, GabrielGraph, ReplayToken, SampleCfg, SampleLayout};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "uniform".to_string());
    let layout = match mode.as_str() {
        "uniform" => SampleLayout::Uniform,
        "grid" => SampleLayout::JitteredGrid { jitter: 0.6 },
        _ => {
            eprintln!("usage: random_cloud [uniform|grid]");
            return;
        }
    };
    for (i, count) in [10usize, 100, 1_000].into_iter().enumerate() {
        let cfg = SampleCfg {
            count,
            layout,
            ..SampleCfg::default()
        };
        let tok = ReplayToken {
            seed: 2025,
            index: i as u64,
        };
        let graph = match draw_points(cfg, tok).and_then(GabrielGraph::new) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("sample {i}: {e}");
                continue;
            }
        };
        println!(
            "sample {i}: n={}, triangles={}, delaunay={}, gabriel={}",
            graph.points().len(),
            graph.simplices().len(),
            graph.delaunay_edges().len(),
            graph.gabriel_edges().len()
        );
    }
}
