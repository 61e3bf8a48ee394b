//! Basic 2D types and tolerances shared by the hull engine.
//!
//! - `Point`: a 2D point with `f64` coordinates (nalgebra column vector).
//! - `HullCfg`: centralizes the collinearity tolerance.
//! - `Orientation`: sign of the turn `a → b → c`.
//!
//! Code cross-refs: `util::{cross, orient}`, `crate::hull::Hull`

use nalgebra::Vector2;

/// A point in the plane. Compared by exact coordinate equality.
pub type Point = Vector2<f64>;

/// Hull configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Relative collinearity tolerance: a triple counts as collinear when
    /// `|cross| <= eps_collinear * L^2`, `L` its longest side (see `orient`).
    /// Collinear boundary points are not hull vertices.
    pub eps_collinear: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_collinear: 1e-12,
        }
    }
}

impl HullCfg {
    /// Exact predicates (zero tolerance). Suitable for integer-valued inputs.
    #[inline]
    pub fn exact() -> Self {
        Self { eps_collinear: 0.0 }
    }
}

/// Turn direction of an ordered triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}
