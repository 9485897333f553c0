//! Andrew's monotone-chain convex hull.

use log::debug;
use nalgebra::Vector2;

use super::primitives::{cross2, point2};
use super::sort::argsort_points;
use super::types::Order;
use crate::nd::{Array, NdRead, Scalar};

/// Convex hull of the first `count` points (all rows when `None`).
///
/// Returns the hull vertices in strict counter-clockwise order, each drawn
/// from the input set. Fewer than 3 effective points are a trivial hull and
/// come back unchanged, in input order, without convexity validation.
/// All-collinear input collapses to the two lexicographic extremes.
///
/// Turn tests compare the cross product against exact zero; collinear
/// triples are popped, so no three consecutive output vertices are
/// collinear. Duplicate input points are tolerated.
///
/// # Panics
/// If `points` is not of shape `(N, 2)` or `count > N`.
pub fn convex_hull<T: Scalar>(points: &impl NdRead<T, 2>, count: Option<usize>) -> Array<T, 2> {
    let rows = points.shape()[0];
    assert!(
        points.shape()[1] == 2,
        "expected an (N, 2) point set, got shape {:?}",
        points.shape()
    );
    let n = count.unwrap_or(rows);
    assert!(n <= rows, "count {} exceeds {} point rows", n, rows);

    if n < 3 {
        return gather(points, &(0..n).collect::<Vec<_>>());
    }

    let sorted = argsort_points(points, Order::Ascending, Some(n));

    // Lower chain over ascending x, popping non-CCW turns.
    let mut hull: Vec<usize> = Vec::with_capacity(n + 1);
    for &idx in &sorted {
        while hull.len() >= 2 && turn(points, hull[hull.len() - 2], hull[hull.len() - 1], idx) <= 0.0
        {
            hull.pop();
        }
        hull.push(idx);
    }

    // Upper chain over descending x, never popping into the lower chain.
    let lower_len = hull.len();
    for &idx in sorted[..n - 1].iter().rev() {
        while hull.len() > lower_len
            && turn(points, hull[hull.len() - 2], hull[hull.len() - 1], idx) <= 0.0
        {
            hull.pop();
        }
        hull.push(idx);
    }

    // The upper chain ends where the lower chain started.
    hull.pop();

    debug!("convex hull: {} of {} points", hull.len(), n);
    gather(points, &hull)
}

/// Cross product of `(last - prev)` with `(candidate - prev)`; non-positive
/// means a right turn or collinearity.
#[inline]
fn turn<T: Scalar>(points: &impl NdRead<T, 2>, prev: usize, last: usize, candidate: usize) -> f64 {
    let p0: Vector2<f64> = point2(points, prev);
    let p1 = point2(points, last);
    let p2 = point2(points, candidate);
    cross2(p1 - p0, p2 - p0)
}

/// Copy the selected rows into a fresh owning `(len, 2)` array.
fn gather<T: Scalar>(points: &impl NdRead<T, 2>, indices: &[usize]) -> Array<T, 2> {
    let mut data = Vec::with_capacity(indices.len() * 2);
    for &i in indices {
        data.push(points.get([i, 0]));
        data.push(points.get([i, 1]));
    }
    Array::from_vec(data, [indices.len(), 2])
}
