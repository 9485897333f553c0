//! Numeric element bound for strided arrays.

use num_traits::{Num, NumCast};

/// Element types storable in an array: plain numerics with the four
/// arithmetic operators, an ordering, and a lossless-enough cast to `f64`
/// for the geometric reductions (`norm`, `cross`).
///
/// Blanket-implemented for every primitive integer and float type.
pub trait Scalar: Copy + PartialOrd + Num + NumCast + std::fmt::Debug + 'static {}

impl<T> Scalar for T where T: Copy + PartialOrd + Num + NumCast + std::fmt::Debug + 'static {}

/// Promote a scalar to `f64` for floating-point predicates and reductions.
///
/// All primitive numerics convert; a failed cast (only possible for exotic
/// third-party `NumCast` types) yields NaN, which propagates visibly instead
/// of silently clamping.
#[inline]
pub fn to_f64<T: Scalar>(x: T) -> f64 {
    num_traits::cast(x).unwrap_or(f64::NAN)
}
