//! Divide-and-conquer convex hull with a tangent-walk merge.
//!
//! Purpose
//! - Pure function from a planar point set to its convex hull polygon, in
//!   `O(n log n)`: sort once, split recursively, merge sibling hulls in
//!   `O(h_left + h_right)` by walking the upper and lower tangents.
//!
//! Conventions
//! - Hulls are canonical: counter-clockwise, starting at the lexicographically
//!   smallest vertex, without collinear vertices (`HullCfg::eps_collinear`).
//! - Degenerate inputs give degenerate hulls: one point, or the two extremes of
//!   a collinear set. Duplicates are collapsed.
//! - Empty input, non-finite coordinates and (for `compute_hull`) unsorted input
//!   are `HullError`s.
//!
//! Code cross-refs: `geom2::{sort_points, cross, orient}`, `observer::MergeObserver`,
//! `reference::monotone_chain` (independent cross-check).

mod driver;
mod error;
mod merge;
pub mod observer;
mod reference;
mod types;

#[cfg(feature = "parallel")]
pub use driver::convex_hull_par;
pub use driver::{compute_hull, convex_hull, convex_hull_with, merge};
pub use error::HullError;
pub use merge::{find_tangent, Tangent};
pub use observer::{MergeEvent, MergeObserver, NoopObserver, RecordingObserver, TangentKind};
pub use reference::monotone_chain;
pub use types::Hull;
