//! Planar primitives used by the hull engine.
//!
//! Purpose
//! - One orientation predicate (signed cross product) used by every turn and
//!   tangent test; no angle-based comparisons anywhere.
//! - Input preprocessing (validation + lexicographic sort) and reproducible
//!   random point sets.
//!
//! Code cross-refs: `crate::hull::{compute_hull, merge}`

pub mod rand;
mod sort;
mod types;
mod util;

pub use sort::{sort_points, validate_points};
pub(crate) use sort::first_unsorted;
pub use types::{HullCfg, Orientation, Point};
pub(crate) use util::lies_behind;
pub use util::{cross, lex_cmp, orient};
