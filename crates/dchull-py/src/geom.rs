//! Hull bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_hull_err, points_from_py, points_to_py};
use dchull::hull::{convex_hull_with, monotone_chain, NoopObserver};
use dchull::HullCfg;
use pyo3::prelude::*;

fn cfg_from_eps(eps_collinear: Option<f64>) -> HullCfg {
    eps_collinear
        .map(|eps_collinear| HullCfg { eps_collinear })
        .unwrap_or_default()
}

/// Convex hull (counter-clockwise, starting at the lexicographically smallest vertex).
#[pyfunction]
#[pyo3(signature = (points, eps_collinear=None))]
pub fn convex_hull(
    points: Vec<(f64, f64)>,
    eps_collinear: Option<f64>,
) -> PyResult<Vec<(f64, f64)>> {
    let pts = points_from_py(points);
    let hull = convex_hull_with(&pts, &cfg_from_eps(eps_collinear), &mut NoopObserver)
        .map_err(map_hull_err)?;
    Ok(points_to_py(hull.vertices()))
}

/// Reference hull via Andrew's monotone chain (same output convention).
#[pyfunction]
#[pyo3(signature = (points, eps_collinear=None))]
pub fn convex_hull_reference(
    points: Vec<(f64, f64)>,
    eps_collinear: Option<f64>,
) -> PyResult<Vec<(f64, f64)>> {
    let pts = points_from_py(points);
    let hull = monotone_chain(&pts, &cfg_from_eps(eps_collinear)).map_err(map_hull_err)?;
    Ok(points_to_py(hull.vertices()))
}

/// Signed cross product `(b - a) x (c - a)`; positive for a counter-clockwise turn.
#[pyfunction]
pub fn orientation(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    let p = points_from_py(vec![a, b, c]);
    dchull::geom2::cross(p[0], p[1], p[2])
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    m.add_function(wrap_pyfunction!(convex_hull_reference, m)?)?;
    m.add_function(wrap_pyfunction!(orientation, m)?)?;
    Ok(())
}
