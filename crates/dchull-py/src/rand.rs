//! Random point-set bindings mirroring `dchull::geom2::rand`.

use crate::common::points_to_py;
use dchull::geom2::rand::{sample_points, PointDist, ReplayToken};
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Sample `n` points; `dist` is one of "disk", "square", "circle".
#[pyfunction]
#[pyo3(signature = (n, dist="disk", radius=1.0, seed=0, index=0))]
pub fn sample(
    n: usize,
    dist: &str,
    radius: f64,
    seed: u64,
    index: u64,
) -> PyResult<Vec<(f64, f64)>> {
    let dist = match dist {
        "disk" => PointDist::UniformDisk { radius },
        "square" => PointDist::UniformSquare { half_width: radius },
        "circle" => PointDist::Circle { radius },
        other => {
            return Err(PyValueError::new_err(format!(
                "unknown distribution {other:?} (expected disk, square or circle)"
            )))
        }
    };
    let pts = sample_points(n, dist, Vector2::zeros(), ReplayToken { seed, index });
    Ok(points_to_py(&pts))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sample, m)?)?;
    Ok(())
}
