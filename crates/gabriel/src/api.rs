//! Curated API surface for callers (CLI, benches, examples).
//!
//! Important
//! - Not a stability promise; breaking changes are allowed while the crate is
//!   internal to this workspace.
//! - Prefer these re-exports so call sites read the same across the workspace.

// Kernel
pub use crate::geometry::{
    check_points, inside_diametral_circle, inside_diametral_circle_with, squared_distance,
    Euclidean, Metric, Point,
};
// Edges and triangulation
pub use crate::edge::{edges_of, simplex_edges, Edge, EdgeSet};
pub use crate::triangulation::{Simplex, SpadeDelaunay, Triangulator};
// Gabriel filter and graph state
pub use crate::builder::{build, build_with, GabrielCfg};
pub use crate::error::{GabrielError, Result};
pub use crate::graph::GabrielGraph;
// Random point clouds
pub use crate::sample::{
    draw_points, jittered_grid, uniform_points, Bounds2, Layout as SampleLayout, ReplayToken,
    SampleCfg,
};
