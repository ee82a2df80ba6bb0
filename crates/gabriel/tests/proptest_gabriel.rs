//! Property-based tests for the Gabriel filter.
//!
//! - Gabriel edges are a subset of the Delaunay edges
//! - Output does not depend on simplex order (sequential and parallel)
//! - Rebuilding with the same points is idempotent

use gabriel::api::{
    build, build_with, edges_of, Euclidean, GabrielCfg, GabrielGraph, Point, SpadeDelaunay,
    Triangulator,
};
use nalgebra::Vector2;
use proptest::prelude::*;
use std::collections::HashSet;

fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

/// 3..40 points with exact duplicates removed; may still be collinear.
fn point_cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((finite_coordinate(), finite_coordinate()), 3..40).prop_map(|raw| {
        let mut seen = HashSet::new();
        raw.into_iter()
            .filter(|(x, y)| seen.insert(((x + 0.0).to_bits(), (y + 0.0).to_bits())))
            .map(|(x, y)| Vector2::new(x, y))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn gabriel_is_subgraph_of_delaunay(points in point_cloud()) {
        let Ok(graph) = GabrielGraph::new(points) else {
            return Ok(()); // degenerate draw
        };
        let delaunay = graph.delaunay_edges();
        for e in graph.gabriel_edges() {
            prop_assert!(delaunay.contains(e), "{e:?} not a Delaunay edge");
        }
    }

    #[test]
    fn simplex_order_does_not_matter(points in point_cloud(), rotate in 0usize..64) {
        let Ok(simplices) = SpadeDelaunay.triangulate(&points) else {
            return Ok(());
        };
        let reference = build(&points, &simplices).unwrap();

        let mut reversed = simplices.clone();
        reversed.reverse();
        prop_assert_eq!(&build(&points, &reversed).unwrap(), &reference);

        let mut rotated = simplices.clone();
        let k = rotate % rotated.len();
        rotated.rotate_left(k);
        // Also permute vertices inside each triangle.
        for s in rotated.iter_mut() {
            s.rotate_left(k % 3);
        }
        prop_assert_eq!(&build(&points, &rotated).unwrap(), &reference);

        let par = build_with(&points, &rotated, &Euclidean, GabrielCfg { parallel: true }).unwrap();
        prop_assert_eq!(&par, &reference);
    }

    #[test]
    fn rebuild_is_idempotent(points in point_cloud()) {
        let Ok(first) = GabrielGraph::new(points.clone()) else {
            return Ok(());
        };
        let second = first.rebuild(points).unwrap();
        prop_assert_eq!(first.gabriel_edges(), second.gabriel_edges());
        prop_assert_eq!(&edges_of(first.simplices()), &second.delaunay_edges());
    }
}

#[test]
fn collinear_and_tiny_inputs_are_degenerate() {
    let line: Vec<Point> = (0..5).map(|i| Vector2::new(i as f64, 2.0 * i as f64)).collect();
    assert!(GabrielGraph::new(line).unwrap_err().is_degenerate());
    let pair = vec![Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0)];
    assert!(GabrielGraph::new(pair).unwrap_err().is_degenerate());
}
