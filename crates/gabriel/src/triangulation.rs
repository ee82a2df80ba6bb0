//! Triangulation provider seam and its `spade` backend.
//!
//! The Gabriel builder never triangulates on its own; it consumes a list of
//! simplices from a `Triangulator`. `SpadeDelaunay` wraps
//! `spade::DelaunayTriangulation` (exact predicates) and maps its vertices back
//! to input indices.
//!
//! Contract for any provider
//! - Every simplex indexes into the input slice; no simplex repeats a vertex.
//! - No input point lies strictly inside the circumcircle of a simplex it does
//!   not belong to.
//! - Fewer than 3 points, all-collinear input and coincident points fail with
//!   `DegenerateInput`.

use std::collections::HashMap;

use spade::{DelaunayTriangulation, HasPosition, Point2, Triangulation};

use crate::error::{GabrielError, Result};
use crate::geometry::{check_points, Point};

/// Triangle as three point indices. Unordered for the builder; `SpadeDelaunay`
/// emits them counterclockwise.
pub type Simplex = [usize; 3];

/// Produces the simplices of a triangulation of `points`.
pub trait Triangulator {
    fn triangulate(&self, points: &[Point]) -> Result<Vec<Simplex>>;
}

/// Closures act as providers (handy for fixed or reordered simplex lists).
impl<F> Triangulator for F
where
    F: Fn(&[Point]) -> Result<Vec<Simplex>>,
{
    fn triangulate(&self, points: &[Point]) -> Result<Vec<Simplex>> {
        self(points)
    }
}

/// Delaunay triangulation via `spade`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpadeDelaunay;

#[derive(Clone, Copy, Debug)]
struct IndexedVertex {
    index: usize,
    position: Point2<f64>,
}

impl HasPosition for IndexedVertex {
    type Scalar = f64;

    fn position(&self) -> Point2<f64> {
        self.position
    }
}

impl Triangulator for SpadeDelaunay {
    fn triangulate(&self, points: &[Point]) -> Result<Vec<Simplex>> {
        if points.len() < 3 {
            return Err(GabrielError::degenerate(format!(
                "need at least 3 points, got {}",
                points.len()
            )));
        }
        check_points(points)?;
        reject_coincident(points)?;

        let vertices: Vec<IndexedVertex> = points
            .iter()
            .enumerate()
            .map(|(index, p)| IndexedVertex {
                index,
                position: Point2::new(p.x, p.y),
            })
            .collect();
        let dt = DelaunayTriangulation::<IndexedVertex>::bulk_load_stable(vertices)
            .map_err(|e| GabrielError::invalid(format!("triangulation rejected input: {e:?}")))?;

        if dt.num_inner_faces() == 0 {
            return Err(GabrielError::degenerate(format!(
                "all {} points are collinear",
                points.len()
            )));
        }
        let simplices: Vec<Simplex> = dt
            .inner_faces()
            .map(|face| face.vertices().map(|v| v.data().index))
            .collect();
        tracing::debug!(
            points = points.len(),
            simplices = simplices.len(),
            "delaunay triangulation"
        );
        Ok(simplices)
    }
}

/// Coincident points would collapse into one triangulation vertex and lose an index.
fn reject_coincident(points: &[Point]) -> Result<()> {
    let mut seen: HashMap<(u64, u64), usize> = HashMap::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        // `+ 0.0` folds -0.0 into 0.0 so both hash alike.
        let key = ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits());
        if let Some(&j) = seen.get(&key) {
            return Err(GabrielError::degenerate(format!(
                "points {j} and {i} coincide at ({}, {})",
                p.x, p.y
            )));
        }
        seen.insert(key, i);
    }
    Ok(())
}
