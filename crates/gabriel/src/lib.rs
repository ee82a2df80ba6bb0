//! Proximity graphs over planar point sets.
//!
//! The Delaunay triangulation comes from `spade` (see `triangulation`); this
//! crate filters it down to the Gabriel graph: an edge `ab` survives iff no
//! vertex of an adjacent triangle lies strictly inside the circle with
//! diameter `ab`.
//!
//! Layout
//! - `geometry`: points, metrics and the diametral-circle predicate.
//! - `edge`: canonical undirected edges and edge sets.
//! - `triangulation`: the triangulation provider seam and its spade backend.
//! - `builder`: the Gabriel filter over a simplex list.
//! - `graph`: immutable `GabrielGraph` state with read-only queries.
//! - `sample`: reproducible random point sets for tests, benches and the CLI.

pub mod api;
pub mod builder;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod sample;
pub mod triangulation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use builder::{build, build_with, GabrielCfg};
pub use edge::{Edge, EdgeSet};
pub use error::{GabrielError, Result};
pub use geometry::{Euclidean, Metric, Point};
pub use graph::GabrielGraph;
pub use triangulation::{Simplex, SpadeDelaunay, Triangulator};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::builder::{build, build_with, GabrielCfg};
    pub use crate::edge::{Edge, EdgeSet};
    pub use crate::error::{GabrielError, Result};
    pub use crate::geometry::{inside_diametral_circle, squared_distance, Euclidean, Metric, Point};
    pub use crate::graph::GabrielGraph;
    pub use crate::sample::{jittered_grid, uniform_points, Bounds2, ReplayToken, SampleCfg};
    pub use crate::triangulation::{Simplex, SpadeDelaunay, Triangulator};
    pub use nalgebra::Vector2 as Vec2;
}
