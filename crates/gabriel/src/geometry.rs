//! Geometry kernel: squared distances and the diametral-circle predicate.
//!
//! - `Metric`: squared distance between two points; `Euclidean` is the default.
//! - `inside_diametral_circle`: Thales test `|x−y|² > |x−p|² + |y−p|²`.
//!
//! Conventions
//! - Everything works on squared distances; no square roots, no normalization.
//! - The inequality is strict: a point exactly on the circle (right angle at `p`)
//!   is not inside, so ties keep the edge.

use nalgebra::Vector2;

use crate::error::{GabrielError, Result};

/// A point in the plane. Its identity is its index in the input slice.
pub type Point = Vector2<f64>;

/// Squared distance used by the Gabriel predicate.
///
/// Implementations must be symmetric and return a finite, non-negative value for
/// finite input. `Sync` so the parallel builder can share one instance.
pub trait Metric: Sync {
    fn squared_distance(&self, p: &Point, q: &Point) -> f64;
}

/// L2 metric (squared).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn squared_distance(&self, p: &Point, q: &Point) -> f64 {
        squared_distance(p, q)
    }
}

/// Sum of squared coordinate differences.
#[inline]
pub fn squared_distance(p: &Point, q: &Point) -> f64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    dx * dx + dy * dy
}

/// True iff `p` lies strictly inside the circle with diameter `xy` (Euclidean).
#[inline]
pub fn inside_diametral_circle(x: &Point, y: &Point, p: &Point) -> bool {
    squared_distance(x, y) > squared_distance(x, p) + squared_distance(y, p)
}

/// Metric-aware variant of [`inside_diametral_circle`].
///
/// Fails with `InvalidArgument` if the metric yields a negative or non-finite value.
pub fn inside_diametral_circle_with<M: Metric + ?Sized>(
    metric: &M,
    x: &Point,
    y: &Point,
    p: &Point,
) -> Result<bool> {
    let diam_sq = checked(metric, x, y)?;
    let via_p = checked(metric, x, p)? + checked(metric, y, p)?;
    Ok(diam_sq > via_p)
}

#[inline]
fn checked<M: Metric + ?Sized>(metric: &M, p: &Point, q: &Point) -> Result<f64> {
    let d = metric.squared_distance(p, q);
    if d.is_finite() && d >= 0.0 {
        Ok(d)
    } else {
        Err(GabrielError::invalid(format!(
            "metric returned {d} for ({}, {}) -> ({}, {})",
            p.x, p.y, q.x, q.y
        )))
    }
}

/// Reject non-finite coordinates.
pub fn check_points(points: &[Point]) -> Result<()> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(i) => Err(GabrielError::invalid(format!(
            "point {i} has a non-finite coordinate ({}, {})",
            points[i].x, points[i].y
        ))),
        None => Ok(()),
    }
}
