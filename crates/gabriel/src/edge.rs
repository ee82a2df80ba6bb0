//! Undirected edges between point indices.
//!
//! An `Edge` is a value: two edges with the same endpoints are the same edge.
//! The constructor stores the smaller index first, so derived `Eq`/`Ord`/`Hash`
//! give set semantics without any unordered-pair hashing.

use std::collections::BTreeSet;

use crate::triangulation::Simplex;

/// Unordered pair `{a, b}` stored as `a <= b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }
    /// Smaller endpoint.
    #[inline]
    pub fn a(&self) -> usize {
        self.a
    }
    /// Larger endpoint.
    #[inline]
    pub fn b(&self) -> usize {
        self.b
    }
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.a == v || self.b == v
    }
    /// The endpoint that is not `v`, if `v` is an endpoint.
    #[inline]
    pub fn other(&self, v: usize) -> Option<usize> {
        if self.a == v {
            Some(self.b)
        } else if self.b == v {
            Some(self.a)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Edge {
    #[inline]
    fn from((i, j): (usize, usize)) -> Self {
        Edge::new(i, j)
    }
}

/// Set of edges; ordered so iteration and serialized output are deterministic.
pub type EdgeSet = BTreeSet<Edge>;

/// The three edges of a triangle, each paired with its opposite vertex.
#[inline]
pub fn simplex_edges(s: &Simplex) -> [(Edge, usize); 3] {
    let [i, j, k] = *s;
    [
        (Edge::new(i, j), k),
        (Edge::new(i, k), j),
        (Edge::new(j, k), i),
    ]
}

/// Union of all triangle edges.
pub fn edges_of(simplices: &[Simplex]) -> EdgeSet {
    simplices
        .iter()
        .flat_map(|s| simplex_edges(s).map(|(e, _)| e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_order() {
        let e = Edge::new(7, 2);
        assert_eq!(e.endpoints(), (2, 7));
        assert_eq!(e, Edge::new(2, 7));
        assert_eq!(e, Edge::from((7, 2)));
        let mut h = HashSet::new();
        h.insert(Edge::new(3, 1));
        assert!(h.contains(&Edge::new(1, 3)));
    }

    #[test]
    fn other_endpoint() {
        let e = Edge::new(4, 9);
        assert!(e.contains(9));
        assert_eq!(e.other(9), Some(4));
        assert_eq!(e.other(4), Some(9));
        assert_eq!(e.other(5), None);
    }

    #[test]
    fn opposite_vertices_of_a_triangle() {
        let es = simplex_edges(&[5, 1, 3]);
        assert_eq!(es[0], (Edge::new(1, 5), 3));
        assert_eq!(es[1], (Edge::new(3, 5), 1));
        assert_eq!(es[2], (Edge::new(1, 3), 5));
    }

    #[test]
    fn shared_edges_are_deduplicated() {
        let set = edges_of(&[[0, 1, 2], [2, 1, 3]]);
        assert_eq!(set.len(), 5);
        assert!(set.contains(&Edge::new(1, 2)));
    }
}
