//! Planar geometry over rank-2 point sets.
//!
//! Purpose
//! - `argsort_points`: deterministic lexicographic ordering of a point set.
//! - `convex_hull`: Andrew's monotone chain, CCW output, trivial inputs
//!   returned unchanged.
//! - `min_area_rectangle`: rotating-calipers minimum-area oriented bounding
//!   rectangle, one candidate per hull edge.
//! - `rand`: seeded point-cloud sampler for randomized validation.
//! - `validate`: eps-aware invariant predicates (subset, CCW convexity,
//!   containment) used as the correctness oracle in tests.
//!
//! Conventions
//! - A point set is any rank-2 readable of shape `(N, 2)`; row `i` is the
//!   point `(x_i, y_i)`. Duplicate points are tolerated everywhere.
//! - Hull construction compares cross products against exact zero; only the
//!   validation predicates take an epsilon.

pub mod rand;
pub mod validate;

mod hull;
mod minrect;
mod primitives;
mod sort;
mod types;

pub use hull::convex_hull;
pub use minrect::min_area_rectangle;
pub use primitives::{cross, cross2};
pub use sort::argsort_points;
pub use types::{Order, RotatedRectangle};
