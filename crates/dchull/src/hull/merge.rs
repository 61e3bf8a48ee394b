//! Tangent-walk merge of two canonical hulls.
//!
//! Preconditions (guaranteed by the driver's split of lexicographically sorted input)
//! - Both hulls are canonical (CCW, start at their lexicographic minimum).
//! - Every point of `left` is lexicographically smaller than every point of `right`.
//!
//! Walk
//! - Upper tangent: start at the rightmost vertex of `left` and the leftmost vertex of
//!   `right`. Step the left candidate counter-clockwise and the right candidate
//!   clockwise while the next vertex lies strictly above the current line, or on it
//!   and further out. Alternate until neither side moves. The lower tangent mirrors
//!   the directions and looks below the line.
//! - Each candidate only moves monotonically along its chain, so both tangents cost
//!   `O(|left| + |right|)` together.
//!
//! Collinear vertices on a tangent are skipped (the walk moves to the outermost one),
//! which keeps the merged hull free of collinear vertices.

use tracing::{trace, warn};

use super::observer::{MergeObserver, TangentKind};
use crate::geom2::{lex_cmp, lies_behind, orient, HullCfg, Orientation, Point};

/// Indices of the tangent endpoints in `left` and `right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangent {
    pub left: usize,
    pub right: usize,
}

type Step = fn(usize, usize) -> usize;

#[inline]
fn next(i: usize, n: usize) -> usize {
    (i + 1) % n
}

#[inline]
fn prev(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

/// Index of the lexicographically largest vertex.
fn rightmost(hull: &[Point]) -> usize {
    hull.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| lex_cmp(a, b))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Whether moving an endpoint of the line `a → b` to `cand` improves the tangent.
///
/// `cand` replaces `a` when `moving_left`, otherwise `b`.
#[inline]
fn improves(
    a: Point,
    b: Point,
    cand: Point,
    kind: TangentKind,
    moving_left: bool,
    eps: f64,
) -> bool {
    match (orient(a, b, cand, eps), kind) {
        (Orientation::CounterClockwise, TangentKind::Upper) => true,
        (Orientation::Clockwise, TangentKind::Lower) => true,
        (Orientation::Collinear, _) => {
            if moving_left {
                lies_behind(cand, a, b)
            } else {
                lies_behind(cand, b, a)
            }
        }
        _ => false,
    }
}

/// Find the upper or lower tangent between `left` and `right`.
pub fn find_tangent(left: &[Point], right: &[Point], kind: TangentKind, eps: f64) -> Tangent {
    let (nl, nr) = (left.len(), right.len());
    let (step_left, step_right) = match kind {
        TangentKind::Upper => (next as Step, prev as Step),
        TangentKind::Lower => (prev as Step, next as Step),
    };
    let mut i = rightmost(left);
    let mut j = 0usize;
    // a consistent predicate never needs more than one lap per side
    let mut budget = 2 * (nl + nr);
    loop {
        let mut moved = false;
        while budget > 0 {
            let cand = step_right(j, nr);
            if !improves(left[i], right[j], right[cand], kind, false, eps) {
                break;
            }
            j = cand;
            moved = true;
            budget -= 1;
        }
        while budget > 0 {
            let cand = step_left(i, nl);
            if !improves(left[i], right[j], left[cand], kind, true, eps) {
                break;
            }
            i = cand;
            moved = true;
            budget -= 1;
        }
        if !moved {
            break;
        }
        if budget == 0 {
            warn!(?kind, nl, nr, "tangent walk exhausted its step budget");
            break;
        }
    }
    Tangent { left: i, right: j }
}

/// Merge two canonical hulls into the canonical hull of their union.
pub(crate) fn merge_hulls(
    left: &[Point],
    right: &[Point],
    cfg: &HullCfg,
    observer: &mut dyn MergeObserver,
) -> Vec<Point> {
    let eps = cfg.eps_collinear;
    let upper = find_tangent(left, right, TangentKind::Upper, eps);
    let lower = find_tangent(left, right, TangentKind::Lower, eps);
    observer.on_tangent(TangentKind::Upper, left[upper.left], right[upper.right]);
    observer.on_tangent(TangentKind::Lower, left[lower.left], right[lower.right]);

    let (nl, nr) = (left.len(), right.len());
    let mut out = Vec::with_capacity(nl + nr);
    // left chain: upper → lower, counter-clockwise
    let mut i = upper.left;
    loop {
        out.push(left[i]);
        if i == lower.left {
            break;
        }
        i = next(i, nl);
    }
    // right chain: lower → upper, counter-clockwise
    let mut j = lower.right;
    loop {
        out.push(right[j]);
        if j == upper.right {
            break;
        }
        j = next(j, nr);
    }
    let start = leftmost(&out);
    out.rotate_left(start);
    trace!(
        nl,
        nr,
        upper = ?(upper.left, upper.right),
        lower = ?(lower.left, lower.right),
        merged = out.len(),
        "merge"
    );
    observer.on_merge(left, right, &out);
    out
}

/// Position of the lexicographically smallest vertex (canonical start).
fn leftmost(hull: &[Point]) -> usize {
    hull.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| lex_cmp(a, b))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::observer::NoopObserver;
    use nalgebra::vector;

    fn merge_exact(left: &[Point], right: &[Point]) -> Vec<Point> {
        merge_hulls(left, right, &HullCfg::exact(), &mut NoopObserver)
    }

    #[test]
    fn tangents_between_triangles() {
        let left = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 10.0]];
        let right = vec![vector![1.0, 11.0], vector![5.0, 0.0], vector![5.0, 20.0]];
        let up = find_tangent(&left, &right, TangentKind::Upper, 0.0);
        assert_eq!(up, Tangent { left: 0, right: 0 });
        let lo = find_tangent(&left, &right, TangentKind::Lower, 0.0);
        assert_eq!(lo, Tangent { left: 0, right: 1 });
        assert_eq!(
            merge_exact(&left, &right),
            vec![
                vector![0.0, 0.0],
                vector![5.0, 0.0],
                vector![5.0, 20.0],
                vector![1.0, 11.0]
            ]
        );
    }

    #[test]
    fn inconsistent_input_stops_at_step_budget() {
        // left point inside a clockwise right polygon: every right step turns the
        // same way, so the walk only ends when its budget runs out
        let left = vec![vector![0.0, 0.0]];
        let right = vec![
            vector![1.0, 1.0],
            vector![1.0, -1.0],
            vector![-1.0, -1.0],
            vector![-1.0, 1.0],
        ];
        for kind in [TangentKind::Upper, TangentKind::Lower] {
            // 2 * (1 + 4) steps around a 4-cycle
            let t = find_tangent(&left, &right, kind, 0.0);
            assert_eq!(t, Tangent { left: 0, right: 2 }, "{kind:?}");
        }
        assert_eq!(
            merge_exact(&left, &right),
            vec![vector![-1.0, -1.0], vector![0.0, 0.0]]
        );
    }

    #[test]
    fn merge_squares_drops_inner_vertices() {
        let left = vec![
            vector![0.0, 0.0],
            vector![1.0, -1.0],
            vector![2.0, 0.0],
            vector![1.0, 1.0],
        ];
        let right = vec![
            vector![3.0, 0.0],
            vector![4.0, -1.0],
            vector![5.0, 0.0],
            vector![4.0, 1.0],
        ];
        let merged = merge_exact(&left, &right);
        assert_eq!(
            merged,
            vec![
                vector![0.0, 0.0],
                vector![1.0, -1.0],
                vector![4.0, -1.0],
                vector![5.0, 0.0],
                vector![4.0, 1.0],
                vector![1.0, 1.0],
            ]
        );
    }

    #[test]
    fn collinear_segments_collapse_to_extremes() {
        let left = vec![vector![0.0, 0.0], vector![1.0, 1.0]];
        let right = vec![vector![2.0, 2.0], vector![3.0, 3.0]];
        assert_eq!(
            merge_exact(&left, &right),
            vec![vector![0.0, 0.0], vector![3.0, 3.0]]
        );
        // vertical line shared by both halves
        let left = vec![vector![0.0, 0.0], vector![0.0, 1.0]];
        let right = vec![vector![0.0, 2.0], vector![0.0, 3.0]];
        assert_eq!(
            merge_exact(&left, &right),
            vec![vector![0.0, 0.0], vector![0.0, 3.0]]
        );
    }

    #[test]
    fn single_points_merge_into_segment_or_triangle() {
        let merged = merge_exact(&[vector![0.0, 0.0]], &[vector![1.0, 2.0]]);
        assert_eq!(merged, vec![vector![0.0, 0.0], vector![1.0, 2.0]]);
        let seg = vec![vector![0.0, 0.0], vector![0.0, 1.0]];
        let merged = merge_exact(&seg, &[vector![1.0, 0.0]]);
        assert_eq!(
            merged,
            vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]]
        );
    }

    #[test]
    fn point_on_tangent_is_skipped() {
        // (2,0) lies on the lower tangent from (0,0) to (4,0)
        let left = vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 1.0]];
        let right = vec![vector![4.0, 0.0], vector![5.0, 1.0]];
        let merged = merge_exact(&left, &right);
        assert_eq!(
            merged,
            vec![
                vector![0.0, 0.0],
                vector![4.0, 0.0],
                vector![5.0, 1.0],
                vector![1.0, 1.0]
            ]
        );
    }
}
