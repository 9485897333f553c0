//! Eps-aware invariant predicates for hulls and rectangles.
//!
//! Purpose
//! - The correctness oracle behind the randomized harness: structural
//!   invariants of `convex_hull` and `min_area_rectangle` output, each as a
//!   boolean predicate with an explicit floating tolerance. Callers assert
//!   on the result; a violation is a bug in the pipeline, not a condition
//!   to collect and report.
//!
//! Hulls of fewer than 3 vertices are trivial and satisfy the hull
//! predicates vacuously.

use nalgebra::Vector2;

use super::primitives::{cross2, point2};
use super::types::RotatedRectangle;
use crate::nd::{NdRead, Scalar};

/// Tolerance used by the randomized harness.
pub const DEFAULT_EPS: f64 = 1e-6;

/// Every hull vertex equals some input point within `eps` per coordinate.
pub fn hull_is_subset_of<T: Scalar>(
    hull: &impl NdRead<T, 2>,
    points: &impl NdRead<T, 2>,
    eps: f64,
) -> bool {
    let n = hull.shape()[0];
    let rows = points.shape()[0];
    (0..n).all(|i| {
        let h = point2(hull, i);
        (0..rows).any(|j| {
            let p = point2(points, j);
            (h.x - p.x).abs() < eps && (h.y - p.y).abs() < eps
        })
    })
}

/// Every three cyclically-consecutive hull vertices turn counter-clockwise
/// (cross product `>= -eps`).
pub fn hull_is_ccw<T: Scalar>(hull: &impl NdRead<T, 2>, eps: f64) -> bool {
    let n = hull.shape()[0];
    if n < 3 {
        return true;
    }
    (0..n).all(|i| {
        let p0 = point2(hull, i);
        let p1 = point2(hull, (i + 1) % n);
        let p2 = point2(hull, (i + 2) % n);
        cross2(p1 - p0, p2 - p1) >= -eps
    })
}

/// Every point lies on or inside the hull: no point is strictly to the
/// right of any CCW hull edge (cross product `>= -eps`).
pub fn hull_contains_all<T: Scalar>(
    hull: &impl NdRead<T, 2>,
    points: &impl NdRead<T, 2>,
    eps: f64,
) -> bool {
    let n = hull.shape()[0];
    if n < 3 {
        return true;
    }
    let rows = points.shape()[0];
    (0..rows).all(|i| {
        let p = point2(points, i);
        (0..n).all(|j| {
            let p0 = point2(hull, j);
            let p1 = point2(hull, (j + 1) % n);
            cross2(p1 - p0, p - p0) >= -eps
        })
    })
}

/// Every point, translated into the rectangle's local frame and rotated by
/// `-angle`, lies within the half-extents plus `eps`.
pub fn rectangle_contains_all<T: Scalar>(
    rect: &RotatedRectangle,
    points: &impl NdRead<T, 2>,
    eps: f64,
) -> bool {
    let (sin_a, cos_a) = rect.angle.sin_cos();
    let u = Vector2::new(cos_a, sin_a);
    let v = Vector2::new(-sin_a, cos_a);
    let half_width = rect.size.x * 0.5;
    let half_height = rect.size.y * 0.5;

    let rows = points.shape()[0];
    (0..rows).all(|i| {
        let translated = point2(points, i) - rect.center;
        let x_local = translated.dot(&u);
        let y_local = translated.dot(&v);
        x_local.abs() <= half_width + eps && y_local.abs() <= half_height + eps
    })
}
