//! Sorter/Preprocessor: validation and lexicographic ordering of raw input.
//!
//! Contract
//! - Rejects empty input and non-finite coordinates (`HullError`).
//! - Returns a fresh vector sorted ascending by `x`, ties by `y`, with exact
//!   duplicates collapsed. The input slice is never mutated.
//! - The order is total on finite inputs, so recursive splits are reproducible.

use super::types::Point;
use super::util::lex_cmp;
use crate::hull::HullError;

/// Check that `points` is non-empty and every coordinate is finite.
pub fn validate_points(points: &[Point]) -> Result<(), HullError> {
    if points.is_empty() {
        return Err(HullError::Empty);
    }
    if let Some((index, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite {
            index,
            x: p.x,
            y: p.y,
        });
    }
    Ok(())
}

/// Validate, copy and sort the input by `(x, y)`; exact duplicates are collapsed.
pub fn sort_points(points: &[Point]) -> Result<Vec<Point>, HullError> {
    validate_points(points)?;
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup_by(|a, b| lex_cmp(a, b).is_eq());
    Ok(pts)
}

/// Index of the first point that is not strictly greater than its predecessor.
pub(crate) fn first_unsorted(points: &[Point]) -> Option<usize> {
    points
        .windows(2)
        .position(|w| !lex_cmp(&w[0], &w[1]).is_lt())
        .map(|k| k + 1)
}
