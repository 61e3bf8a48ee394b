//! Planar convex hulls by divide and conquer.
//!
//! Layout
//! - `geom2`: points, the orientation predicate, input sorting, random point sets.
//! - `hull`: recursion driver, tangent-walk merge, observer hooks, reference hull.
//!
//! The crate is synchronous and allocation-light; the optional `parallel` feature
//! adds `hull::convex_hull_par` on top of rayon.

pub mod geom2;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{HullCfg, Point};
pub use hull::{convex_hull, Hull, HullError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{sample_disk, sample_points, PointDist, ReplayToken};
    pub use crate::geom2::{cross, orient, sort_points, HullCfg, Orientation, Point};
    pub use crate::hull::{
        compute_hull, convex_hull, convex_hull_with, merge, monotone_chain, Hull, HullError,
        MergeObserver, NoopObserver, RecordingObserver, TangentKind,
    };
    pub use nalgebra::Vector2 as Vec2;
}
