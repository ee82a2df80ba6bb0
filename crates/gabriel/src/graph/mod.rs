//! Immutable graph state: points, Delaunay simplices and Gabriel edges.
//!
//! The three parts are computed together and never diverge. There are no
//! mutating operations: `rebuild` returns a fresh `GabrielGraph` for new points
//! and leaves the receiver untouched, so older states stay valid wherever they
//! are still referenced.

use crate::builder::{build_with, GabrielCfg};
use crate::edge::{edges_of, Edge, EdgeSet};
use crate::error::{GabrielError, Result};
use crate::geometry::{Euclidean, Metric, Point};
use crate::triangulation::{Simplex, SpadeDelaunay, Triangulator};

/// Gabriel graph of a planar point set, with the triangulation it came from.
#[derive(Clone, Debug)]
pub struct GabrielGraph<M: Metric = Euclidean> {
    points: Vec<Point>,
    simplices: Vec<Simplex>,
    gabriel_edges: EdgeSet,
    metric: M,
    cfg: GabrielCfg,
}

impl GabrielGraph<Euclidean> {
    /// Delaunay (spade) + Euclidean Gabriel filter, sequential.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        Self::with_provider(points, &SpadeDelaunay, Euclidean, GabrielCfg::default())
    }
}

impl<M: Metric + Clone> GabrielGraph<M> {
    /// Triangulate with `provider`, then filter with `metric`.
    pub fn with_provider<T: Triangulator + ?Sized>(
        points: Vec<Point>,
        provider: &T,
        metric: M,
        cfg: GabrielCfg,
    ) -> Result<Self> {
        let simplices = provider.triangulate(&points)?;
        let gabriel_edges = build_with(&points, &simplices, &metric, cfg)?;
        tracing::debug!(
            points = points.len(),
            simplices = simplices.len(),
            gabriel_edges = gabriel_edges.len(),
            "gabriel graph"
        );
        Ok(Self {
            points,
            simplices,
            gabriel_edges,
            metric,
            cfg,
        })
    }

    /// Fresh state for `points` with the same metric and configuration.
    pub fn rebuild(&self, points: Vec<Point>) -> Result<Self> {
        self.rebuild_with(points, &SpadeDelaunay)
    }

    /// Like [`rebuild`](Self::rebuild) with an explicit provider.
    pub fn rebuild_with<T: Triangulator + ?Sized>(
        &self,
        points: Vec<Point>,
        provider: &T,
    ) -> Result<Self> {
        Self::with_provider(points, provider, self.metric.clone(), self.cfg)
    }
}

impl<M: Metric> GabrielGraph<M> {
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn simplices(&self) -> &[Simplex] {
        &self.simplices
    }

    #[inline]
    pub fn gabriel_edges(&self) -> &EdgeSet {
        &self.gabriel_edges
    }

    #[inline]
    pub fn metric(&self) -> &M {
        &self.metric
    }

    #[inline]
    pub fn cfg(&self) -> GabrielCfg {
        self.cfg
    }

    /// All edges of the triangulation (superset of the Gabriel edges).
    pub fn delaunay_edges(&self) -> EdgeSet {
        edges_of(&self.simplices)
    }

    /// Gabriel neighbours of point `i`, ascending.
    pub fn neighbors(&self, i: usize) -> Result<Vec<usize>> {
        if i >= self.points.len() {
            return Err(GabrielError::invalid(format!(
                "point {i} out of range (graph has {} points)",
                self.points.len()
            )));
        }
        let mut out: Vec<usize> = self
            .gabriel_edges
            .iter()
            .filter_map(|e| e.other(i))
            .collect();
        out.sort_unstable();
        Ok(out)
    }

    /// Endpoint coordinates of each edge, in iteration order (for renderers).
    pub fn edge_segments<'a, I>(&self, edges: I) -> Vec<(Point, Point)>
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        edges
            .into_iter()
            .filter(|e| e.b() < self.points.len())
            .map(|e| (self.points[e.a()], self.points[e.b()]))
            .collect()
    }

    /// Consume the state.
    pub fn into_parts(self) -> (Vec<Point>, Vec<Simplex>, EdgeSet) {
        (self.points, self.simplices, self.gabriel_edges)
    }
}
