//! Gabriel filter over a triangulation's simplex list.
//!
//! Every triangle contributes its three edges as candidates. An edge is
//! removed if the opposite vertex of *any* triangle containing it lies strictly
//! inside the edge's diametral circle. Removals accumulate in one set and are
//! subtracted once at the end; an edge is never re-added after removal, so the
//! result does not depend on the order in which triangles are visited.

use rayon::prelude::*;

use crate::edge::{simplex_edges, Edge, EdgeSet};
use crate::error::{GabrielError, Result};
use crate::geometry::{check_points, inside_diametral_circle_with, Euclidean, Metric, Point};
use crate::triangulation::Simplex;

/// Build configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct GabrielCfg {
    /// Evaluate triangles on the rayon pool; results are merged before the set difference.
    pub parallel: bool,
}

/// Gabriel edges of `simplices` over `points` with the Euclidean metric.
pub fn build(points: &[Point], simplices: &[Simplex]) -> Result<EdgeSet> {
    build_with(points, simplices, &Euclidean, GabrielCfg::default())
}

/// Gabriel edges with an explicit metric and configuration.
///
/// Pre: `simplices` triangulate `points` (not re-checked beyond index sanity).
/// Post: the returned set is a subset of the simplices' edges.
pub fn build_with<M: Metric + ?Sized>(
    points: &[Point],
    simplices: &[Simplex],
    metric: &M,
    cfg: GabrielCfg,
) -> Result<EdgeSet> {
    check_points(points)?;
    check_simplices(points.len(), simplices)?;

    let (candidates, removed) = if cfg.parallel {
        scan_parallel(points, simplices, metric)?
    } else {
        scan(points, simplices, metric)?
    };
    let edges: EdgeSet = candidates.difference(&removed).copied().collect();
    tracing::debug!(
        simplices = simplices.len(),
        candidates = candidates.len(),
        removed = removed.len(),
        kept = edges.len(),
        parallel = cfg.parallel,
        "gabriel filter"
    );
    Ok(edges)
}

fn scan<M: Metric + ?Sized>(
    points: &[Point],
    simplices: &[Simplex],
    metric: &M,
) -> Result<(EdgeSet, EdgeSet)> {
    let mut candidates = EdgeSet::new();
    let mut removed = EdgeSet::new();
    for s in simplices {
        for (edge, opposite) in simplex_edges(s) {
            if removed.contains(&edge) {
                continue;
            }
            candidates.insert(edge);
            if violates(points, metric, edge, opposite)? {
                removed.insert(edge);
            }
        }
    }
    Ok((candidates, removed))
}

fn scan_parallel<M: Metric + ?Sized>(
    points: &[Point],
    simplices: &[Simplex],
    metric: &M,
) -> Result<(EdgeSet, EdgeSet)> {
    let verdicts: Vec<[(Edge, bool); 3]> = simplices
        .par_iter()
        .map(|s| -> Result<[(Edge, bool); 3]> {
            let [e0, e1, e2] = simplex_edges(s);
            let judge = |(edge, opposite): (Edge, usize)| -> Result<(Edge, bool)> {
                Ok((edge, violates(points, metric, edge, opposite)?))
            };
            Ok([judge(e0)?, judge(e1)?, judge(e2)?])
        })
        .collect::<Result<_>>()?;

    // All triangles are evaluated at this point; merge, then subtract.
    let mut candidates = EdgeSet::new();
    let mut removed = EdgeSet::new();
    for (edge, bad) in verdicts.into_iter().flatten() {
        candidates.insert(edge);
        if bad {
            removed.insert(edge);
        }
    }
    Ok((candidates, removed))
}

#[inline]
fn violates<M: Metric + ?Sized>(
    points: &[Point],
    metric: &M,
    edge: Edge,
    opposite: usize,
) -> Result<bool> {
    let (a, b) = edge.endpoints();
    inside_diametral_circle_with(metric, &points[a], &points[b], &points[opposite])
}

fn check_simplices(n: usize, simplices: &[Simplex]) -> Result<()> {
    for (k, s) in simplices.iter().enumerate() {
        if let Some(&i) = s.iter().find(|&&i| i >= n) {
            return Err(GabrielError::invalid(format!(
                "simplex {k} references point {i}, but only {n} points were given"
            )));
        }
        if s[0] == s[1] || s[0] == s[2] || s[1] == s[2] {
            return Err(GabrielError::invalid(format!(
                "simplex {k} repeats a vertex: {s:?}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn e(i: usize, j: usize) -> Edge {
        Edge::new(i, j)
    }

    #[test]
    fn equilateral_keeps_all_edges() {
        let h = 3f64.sqrt() / 2.0;
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.5, h]];
        let g = build(&pts, &[[0, 1, 2]]).unwrap();
        assert_eq!(g, [e(0, 1), e(0, 2), e(1, 2)].into_iter().collect());
    }

    #[test]
    fn obtuse_drops_long_edge() {
        let pts = vec![vector![0.0, 0.0], vector![10.0, 0.0], vector![5.0, 1.0]];
        let g = build(&pts, &[[0, 1, 2]]).unwrap();
        assert_eq!(g, [e(0, 2), e(1, 2)].into_iter().collect());
    }

    #[test]
    fn right_triangle_keeps_hypotenuse() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        let g = build(&pts, &[[0, 1, 2]]).unwrap();
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn removal_from_either_side_sticks() {
        // Edge 0-1 is fine seen from 2 (far above) but violated by 3 (just below).
        let pts = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![2.0, 5.0],
            vector![2.0, -0.5],
        ];
        let forward = build(&pts, &[[0, 1, 2], [1, 0, 3]]).unwrap();
        let backward = build(&pts, &[[1, 0, 3], [0, 1, 2]]).unwrap();
        assert!(!forward.contains(&e(0, 1)));
        assert_eq!(forward, backward);
    }

    #[test]
    fn parallel_matches_sequential() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![2.0, 5.0],
            vector![2.0, -0.5],
        ];
        let simplices = [[0, 1, 2], [1, 0, 3]];
        let seq = build(&pts, &simplices).unwrap();
        let par = build_with(&pts, &simplices, &Euclidean, GabrielCfg { parallel: true }).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn empty_simplex_list_gives_empty_graph() {
        let pts = vec![vector![0.0, 0.0]];
        assert!(build(&pts, &[]).unwrap().is_empty());
    }

    #[test]
    fn bad_simplices_are_rejected() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        let err = build(&pts, &[[0, 1, 3]]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("point 3"));
        let err = build(&pts, &[[0, 1, 1]]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, f64::NAN]];
        assert!(build(&pts, &[[0, 1, 2]]).unwrap_err().is_invalid_argument());
    }
}
