//! Strided numeric arrays and planar geometry built on top of them.
//!
//! Purpose
//! - `nd`: a fixed-rank, row-major strided array (`Array`, `ArrayView`,
//!   `ArrayViewMut`) with owning and borrowing storage behind a common
//!   readable interface, elementwise arithmetic, and reductions.
//! - `geom2`: planar geometry over rank-2 point sets (lexicographic
//!   argsort, Andrew's monotone-chain convex hull, and the minimum-area
//!   oriented bounding rectangle), plus a seeded point-cloud sampler and
//!   eps-aware invariant predicates for randomized validation.
//!
//! Contracts
//! - Preconditions (shape mismatch, out-of-range index, `count > N`) are
//!   caller bugs and panic; see `# Panics` sections. Degenerate but legal
//!   geometry (empty input, single point, collinear sets) never panics and
//!   takes the documented degenerate path.
//! - Everything is single-threaded, pure, in-memory computation.

pub mod geom2;
pub mod nd;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Short alias used throughout the geometry modules.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_point_cloud, PointCloudCfg, ReplayToken};
    pub use crate::geom2::validate::{
        hull_contains_all, hull_is_ccw, hull_is_subset_of, rectangle_contains_all, DEFAULT_EPS,
    };
    pub use crate::geom2::{
        argsort_points, convex_hull, cross, cross2, min_area_rectangle, Order, RotatedRectangle,
    };
    pub use crate::nd::{
        dot, norm, Array, ArrayView, ArrayViewMut, NdRead, NdWrite, Scalar, Shape, Stride,
    };
    pub use nalgebra::Vector2 as Vec2;
}
