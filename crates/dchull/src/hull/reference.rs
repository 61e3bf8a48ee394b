use super::error::HullError;
use super::types::Hull;
use crate::geom2::{orient, sort_points, HullCfg, Orientation, Point};

/// Andrew's monotone chain, returning the same canonical form as `convex_hull`.
///
/// Independent of the tangent-walk merge; used to cross-check it and as the
/// `monotone` algorithm of the CLI.
pub fn monotone_chain(points: &[Point], cfg: &HullCfg) -> Result<Hull, HullError> {
    let pts = sort_points(points)?;
    if pts.len() < 3 {
        return Ok(Hull::from_canonical(pts));
    }
    let eps = cfg.eps_collinear;
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2
            && orient(lower[lower.len() - 2], lower[lower.len() - 1], *p, eps)
                != Orientation::CounterClockwise
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2
            && orient(upper[upper.len() - 2], upper[upper.len() - 1], *p, eps)
                != Orientation::CounterClockwise
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Ok(Hull::from_canonical(hull))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn square_with_center() {
        let pts = vec![
            vector![4.0, 4.0],
            vector![0.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 4.0],
            vector![4.0, 0.0],
            vector![2.0, 0.0],
        ];
        let h = monotone_chain(&pts, &HullCfg::exact()).unwrap();
        assert_eq!(
            h.vertices(),
            &[
                vector![0.0, 0.0],
                vector![4.0, 0.0],
                vector![4.0, 4.0],
                vector![0.0, 4.0]
            ]
        );
    }

    #[test]
    fn degenerate_inputs() {
        let cfg = HullCfg::exact();
        let h = monotone_chain(&[vector![1.0, 1.0], vector![1.0, 1.0]], &cfg).unwrap();
        assert_eq!(h.vertices(), &[vector![1.0, 1.0]]);
        let line: Vec<Point> = (0..5).map(|k| vector![k as f64, 2.0 * k as f64]).collect();
        let h = monotone_chain(&line, &cfg).unwrap();
        assert_eq!(h.vertices(), &[vector![0.0, 0.0], vector![4.0, 8.0]]);
        assert_eq!(monotone_chain(&[], &cfg), Err(HullError::Empty));
    }
}
