use std::cmp::Ordering;

use super::types::{Orientation, Point};

/// Signed cross product `(b - a) × (c - a)`.
///
/// Positive for a counter-clockwise turn, negative for clockwise, zero for collinear.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Orientation of `a → b → c`, collinear when `|cross| <= eps * L^2` with `L` the
/// longest side of the triangle.
///
/// The bound is relative, so the result does not change when all three points are
/// scaled together; `eps` is roughly the sine of the smallest angle still counted as
/// a turn. `eps = 0` is the exact sign test.
#[inline]
pub fn orient(a: Point, b: Point, c: Point, eps: f64) -> Orientation {
    let d = cross(a, b, c);
    let tol = if eps > 0.0 {
        let l2 = (b - a)
            .norm_squared()
            .max((c - a).norm_squared())
            .max((c - b).norm_squared());
        eps * l2
    } else {
        0.0
    };
    if d > tol {
        Orientation::CounterClockwise
    } else if d < -tol {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Lexicographic order on `(x, y)`; `-0.0 == 0.0`. Inputs are assumed finite.
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Whether `p`, assumed on the line through `from` and `to`, lies past `from`
/// on the side away from `to`.
#[inline]
pub(crate) fn lies_behind(p: Point, from: Point, to: Point) -> bool {
    (p - from).dot(&(to - from)) < 0.0
}
