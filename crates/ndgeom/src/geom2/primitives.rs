//! Geometry primitives over 2-element vectors.

use nalgebra::Vector2;

use crate::nd::{to_f64, NdRead, Scalar};

/// 2-D cross product `ax*by - ay*bx` of two rank-1 length-2 arrays,
/// promoted to `f64`. Positive for a counter-clockwise turn from `a` to `b`.
///
/// # Panics
/// If either operand is not of length 2.
#[inline]
pub fn cross<T: Scalar, U: Scalar>(a: &impl NdRead<T, 1>, b: &impl NdRead<U, 1>) -> f64 {
    assert!(
        a.len() == 2 && b.len() == 2,
        "cross product is defined for 2-D vectors only"
    );
    cross2(
        Vector2::new(to_f64(a.at(0)), to_f64(a.at(1))),
        Vector2::new(to_f64(b.at(0)), to_f64(b.at(1))),
    )
}

/// Signed area of the parallelogram spanned by `a` and `b`.
#[inline]
pub fn cross2(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Row `i` of a point set as a promoted `f64` vector.
///
/// # Panics
/// If `i` is out of range or the array is not `(N, 2)`.
#[inline]
pub(crate) fn point2<T: Scalar>(points: &impl NdRead<T, 2>, i: usize) -> Vector2<f64> {
    Vector2::new(to_f64(points.get([i, 0])), to_f64(points.get([i, 1])))
}
