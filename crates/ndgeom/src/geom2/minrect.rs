//! Minimum-area oriented bounding rectangle via rotating calipers.

use log::debug;
use nalgebra::Vector2;

use super::hull::convex_hull;
use super::primitives::point2;
use super::types::RotatedRectangle;
use crate::nd::{NdRead, Scalar};

/// Minimum-area oriented rectangle containing the first `count` points
/// (all rows when `None`).
///
/// Computes the convex hull first, then evaluates one candidate orientation
/// per hull edge by projecting every hull vertex onto the edge direction and
/// its 90° rotation. The comparison is strict `<`, so on exact area ties the
/// candidate from the lowest edge index wins. Zero-length edges contribute
/// no candidate.
///
/// Degenerate cases: an empty hull yields the default zero rectangle; a
/// single-vertex hull yields a zero-size rectangle centered on that vertex.
///
/// # Panics
/// If `points` is not of shape `(N, 2)` or `count > N`.
pub fn min_area_rectangle<T: Scalar>(
    points: &impl NdRead<T, 2>,
    count: Option<usize>,
) -> RotatedRectangle {
    let hull = convex_hull(points, count);
    let n = hull.shape()[0];
    if n == 0 {
        return RotatedRectangle::default();
    }
    if n == 1 {
        return RotatedRectangle {
            center: point2(&hull, 0),
            ..Default::default()
        };
    }

    let mut min_area = f64::INFINITY;
    let mut best = RotatedRectangle::default();

    for i in 0..n {
        let p0 = point2(&hull, i);
        let p1 = point2(&hull, (i + 1) % n);
        let edge = p1 - p0;
        let edge_length = edge.norm();
        if edge_length <= 0.0 {
            continue;
        }
        let u = edge / edge_length;
        let v = Vector2::new(-u.y, u.x);

        let mut min_u = f64::INFINITY;
        let mut max_u = f64::NEG_INFINITY;
        let mut min_v = f64::INFINITY;
        let mut max_v = f64::NEG_INFINITY;
        for j in 0..n {
            let p = point2(&hull, j);
            let proj_u = p.dot(&u);
            let proj_v = p.dot(&v);
            min_u = min_u.min(proj_u);
            max_u = max_u.max(proj_u);
            min_v = min_v.min(proj_v);
            max_v = max_v.max(proj_v);
        }

        let width = max_u - min_u;
        let height = max_v - min_v;
        let area = width * height;
        if area < min_area {
            min_area = area;
            best = RotatedRectangle {
                center: u * (0.5 * (min_u + max_u)) + v * (0.5 * (min_v + max_v)),
                size: Vector2::new(width, height),
                angle: u.y.atan2(u.x),
            };
        }
    }

    debug!(
        "min-area rectangle over {} hull vertices: area {:.6}, angle {:.6} rad",
        n, min_area, best.angle
    );
    best
}
