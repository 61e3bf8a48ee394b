//! PyO3 bindings for selected `dchull` functions.
//!
//! Notes
//! - Keep bindings thin and predictable: points cross the boundary as lists of
//!   `(x, y)` tuples; richer conversions (NumPy, plotting) live on the Python side.
//! - `HullError` surfaces as `ValueError`.

use pyo3::prelude::*;

mod common;
mod geom;
mod rand;

#[pymodule]
fn dchull_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)?;
    rand::register(m)?;
    m.add("__version__", dchull::VERSION)?;
    Ok(())
}
