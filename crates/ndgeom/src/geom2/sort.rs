//! Deterministic lexicographic ordering of point sets.

use std::cmp::Ordering;

use super::types::Order;
use crate::nd::{NdRead, Scalar};

/// Argsort the first `count` points (all rows when `None`) lexicographically
/// by `(x, y)`: equal `x` breaks on `y` in the same direction. Deterministic
/// for a given input; the relative order of exact duplicates is unspecified
/// but stable across runs.
///
/// # Panics
/// If `points` is not of shape `(N, 2)` or `count > N`.
pub fn argsort_points<T: Scalar>(
    points: &impl NdRead<T, 2>,
    order: Order,
    count: Option<usize>,
) -> Vec<usize> {
    let rows = points.shape()[0];
    assert!(
        points.shape()[1] == 2,
        "expected an (N, 2) point set, got shape {:?}",
        points.shape()
    );
    let n = count.unwrap_or(rows);
    assert!(n <= rows, "count {} exceeds {} point rows", n, rows);

    let mut indices: Vec<usize> = (0..n).collect();
    indices.sort_by(|&i, &j| {
        let lex = cmp_coord(points.get([i, 0]), points.get([j, 0])).then_with(|| {
            cmp_coord(points.get([i, 1]), points.get([j, 1]))
        });
        match order {
            Order::Ascending => lex,
            Order::Descending => lex.reverse(),
        }
    });
    indices
}

#[inline]
fn cmp_coord<T: PartialOrd>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
