//! The `Hull` value type and its geometric queries.

use crate::geom2::{cross, Point};

/// Convex hull boundary in canonical form.
///
/// Invariants:
/// - Counter-clockwise order, starting at the lexicographically smallest vertex.
/// - No repeated vertex; the closing edge back to the first vertex is implicit.
/// - No collinear vertex (within the tolerance used to build it).
/// - Degenerate hulls are a single point or a two-point segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    /// Wrap vertices that already satisfy the invariants.
    pub(crate) fn from_canonical(vertices: Vec<Point>) -> Self {
        debug_assert!(!vertices.is_empty(), "hull must have at least one vertex");
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for hulls built by this crate; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Single point or segment.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Edges `(p_k, p_{k+1})`, cyclic. A segment hull yields its edge twice (there and back).
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |k| (self.vertices[k], self.vertices[(k + 1) % n]))
    }

    /// Enclosed area (shoelace). Zero for degenerate hulls.
    pub fn area(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        0.5 * self.edges().map(|(p, q)| p.x * q.y - q.x * p.y).sum::<f64>()
    }

    /// Boundary length. A segment counts twice, a point is zero.
    pub fn perimeter(&self) -> f64 {
        if self.vertices.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(p, q)| (q - p).norm()).sum()
    }

    /// Membership with slack `eps` (absolute distance to the boundary).
    ///
    /// For degenerate hulls this is the distance to the point/segment.
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        match self.vertices.as_slice() {
            [a] => (p - a).norm() <= eps,
            [a, b] => segment_distance(p, *a, *b) <= eps,
            _ => self.edges().all(|(a, b)| {
                let len = (b - a).norm();
                // signed distance to the left of a→b
                cross(a, b, p) >= -eps * len
            }),
        }
    }

    /// Every cyclic vertex triple turns counter-clockwise (cross > -eps).
    pub fn is_convex_eps(&self, eps: f64) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }
        (0..n).all(|k| {
            let a = self.vertices[k];
            let b = self.vertices[(k + 1) % n];
            let c = self.vertices[(k + 2) % n];
            cross(a, b, c) > -eps
        })
    }
}

fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}
