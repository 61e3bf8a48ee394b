//! Divide-and-conquer recursion driver.
//!
//! - Split sorted input at `len / 2` (left half gets the smaller share on odd sizes).
//! - Partitions of at most three points become hulls directly.
//! - Sibling hulls are joined by `merge::merge_hulls`.
//!
//! The recursion tree depends only on the input length, so the same sorted input
//! always produces the same sequence of merges (and observer events).

use tracing::debug;

use super::error::HullError;
use super::merge::merge_hulls;
use super::observer::{MergeObserver, NoopObserver};
use super::types::Hull;
use crate::geom2::{
    first_unsorted, lex_cmp, orient, sort_points, validate_points, HullCfg, Orientation, Point,
};

/// Canonical hull of at most three lexicographically sorted, distinct points.
fn base_hull(points: &[Point], eps: f64) -> Vec<Point> {
    match *points {
        [a, b, c] => match orient(a, b, c, eps) {
            Orientation::CounterClockwise => vec![a, b, c],
            Orientation::Clockwise => vec![a, c, b],
            // sorted, so `b` lies between the extremes
            Orientation::Collinear => vec![a, c],
        },
        _ => points.to_vec(),
    }
}

pub(crate) fn divide(
    points: &[Point],
    cfg: &HullCfg,
    observer: &mut dyn MergeObserver,
) -> Vec<Point> {
    if points.len() <= 3 {
        let hull = base_hull(points, cfg.eps_collinear);
        observer.on_base(&hull);
        return hull;
    }
    let (left, right) = points.split_at(points.len() / 2);
    let left_hull = divide(left, cfg, observer);
    let right_hull = divide(right, cfg, observer);
    merge_hulls(&left_hull, &right_hull, cfg, observer)
}

/// Hull of points that are already sorted by `(x, y)` and free of duplicates.
///
/// `sorted` must be strictly increasing in lexicographic order (see `sort_points`).
/// Errors: empty input, non-finite coordinates, or a point out of order (duplicates
/// included).
pub fn compute_hull(
    sorted: &[Point],
    cfg: &HullCfg,
    observer: &mut dyn MergeObserver,
) -> Result<Hull, HullError> {
    validate_points(sorted)?;
    if let Some(index) = first_unsorted(sorted) {
        return Err(HullError::Unsorted { index });
    }
    Ok(Hull::from_canonical(divide(sorted, cfg, observer)))
}

/// Convex hull of an arbitrary point set with default tolerances.
///
/// The input is validated, sorted and deduplicated first; its order does not matter.
pub fn convex_hull(points: &[Point]) -> Result<Hull, HullError> {
    convex_hull_with(points, &HullCfg::default(), &mut NoopObserver)
}

/// Convex hull with explicit tolerances and a progress observer.
pub fn convex_hull_with(
    points: &[Point],
    cfg: &HullCfg,
    observer: &mut dyn MergeObserver,
) -> Result<Hull, HullError> {
    let sorted = sort_points(points)?;
    let hull = compute_hull(&sorted, cfg, observer)?;
    debug!(
        n_input = points.len(),
        n_distinct = sorted.len(),
        n_hull = hull.len(),
        "convex hull"
    );
    Ok(hull)
}

/// Merge two hulls where every vertex of `left` is lexicographically before every
/// vertex of `right` (for example, hulls of the two halves of a sorted point set).
pub fn merge(left: &Hull, right: &Hull, cfg: &HullCfg) -> Hull {
    debug_assert!(
        left.vertices()
            .iter()
            .max_by(|a, b| lex_cmp(a, b))
            .zip(right.vertices().first())
            .is_some_and(|(l, r)| lex_cmp(l, r).is_lt()),
        "merge expects left strictly before right"
    );
    Hull::from_canonical(merge_hulls(
        left.vertices(),
        right.vertices(),
        cfg,
        &mut NoopObserver,
    ))
}

#[cfg(feature = "parallel")]
const PAR_THRESHOLD: usize = 4096;

#[cfg(feature = "parallel")]
fn divide_par(points: &[Point], cfg: &HullCfg) -> Vec<Point> {
    if points.len() <= PAR_THRESHOLD {
        return divide(points, cfg, &mut NoopObserver);
    }
    let (left, right) = points.split_at(points.len() / 2);
    let (left_hull, right_hull) = rayon::join(|| divide_par(left, cfg), || divide_par(right, cfg));
    merge_hulls(&left_hull, &right_hull, cfg, &mut NoopObserver)
}

/// Parallel variant of `convex_hull_with` (no observer). Sibling halves run on the
/// rayon pool above a size threshold; the split points, and so the result, match
/// the sequential driver.
#[cfg(feature = "parallel")]
pub fn convex_hull_par(points: &[Point], cfg: &HullCfg) -> Result<Hull, HullError> {
    let sorted = sort_points(points)?;
    Ok(Hull::from_canonical(divide_par(&sorted, cfg)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn base_case_orders_ccw() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 1.0];
        let c = vector![2.0, 0.0];
        assert_eq!(base_hull(&[a, b, c], 0.0), vec![a, c, b]);
        let b_low = vector![1.0, -1.0];
        assert_eq!(base_hull(&[a, b_low, c], 0.0), vec![a, b_low, c]);
        assert_eq!(base_hull(&[a, vector![1.0, 0.0], c], 0.0), vec![a, c]);
        assert_eq!(base_hull(&[a, c], 0.0), vec![a, c]);
        assert_eq!(base_hull(&[a], 0.0), vec![a]);
    }

    #[test]
    fn compute_hull_rejects_empty() {
        let err = compute_hull(&[], &HullCfg::default(), &mut NoopObserver).unwrap_err();
        assert_eq!(err, HullError::Empty);
    }

    #[test]
    fn compute_hull_rejects_unsorted_and_duplicates() {
        let cfg = HullCfg::default();
        let unsorted = [vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 5.0]];
        let err = compute_hull(&unsorted, &cfg, &mut NoopObserver).unwrap_err();
        assert_eq!(err, HullError::Unsorted { index: 2 });
        assert!(err.is_invalid_input());
        let dup = [vector![0.0, 0.0], vector![0.0, 0.0], vector![1.0, 1.0]];
        let err = compute_hull(&dup, &cfg, &mut NoopObserver).unwrap_err();
        assert_eq!(err, HullError::Unsorted { index: 1 });
        let sorted = sort_points(&unsorted).unwrap();
        assert_eq!(compute_hull(&sorted, &cfg, &mut NoopObserver).unwrap().len(), 3);
    }
}
