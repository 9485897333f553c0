//! Elementwise arithmetic and reductions over strided arrays.
//!
//! Binary `+ - * /` between two equal-shape arrays of element types `T, U`
//! produce a new owning array of the arithmetic result type; shape mismatch
//! panics. Array∘scalar and scalar∘array broadcast the scalar to every
//! element with no shape check. Scalar-on-the-left impls are enumerated per
//! primitive type, the coherence-compatible pattern for foreign self types.

use std::ops::{Add, Div, Mul, Sub};

use super::array::{Array, ArrayView, NdRead};
use super::scalar::{to_f64, Scalar};

/// Combine two equal-shape arrays element-by-element into a new owning array.
///
/// # Panics
/// If the shapes differ.
pub fn zip_with<T, U, V, const R: usize>(
    a: &impl NdRead<T, R>,
    b: &impl NdRead<U, R>,
    f: impl Fn(T, U) -> V,
) -> Array<V, R>
where
    T: Scalar,
    U: Scalar,
    V: Scalar,
{
    assert!(
        a.shape() == b.shape(),
        "shape mismatch: {:?} vs {:?}",
        a.shape(),
        b.shape()
    );
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Array::from_vec(data, a.shape())
}

/// Apply `f` to every element, producing a new owning array of equal shape.
pub fn map<T, V, const R: usize>(a: &impl NdRead<T, R>, f: impl Fn(T) -> V) -> Array<V, R>
where
    T: Scalar,
    V: Scalar,
{
    let data = a.as_slice().iter().map(|&x| f(x)).collect();
    Array::from_vec(data, a.shape())
}

/// Dot product of two rank-1 arrays in the promoted result type.
///
/// # Panics
/// If the lengths differ.
pub fn dot<T, U, V>(a: &impl NdRead<T, 1>, b: &impl NdRead<U, 1>) -> V
where
    T: Scalar + Mul<U, Output = V>,
    U: Scalar,
    V: Scalar,
{
    assert!(
        a.len() == b.len(),
        "length mismatch: {} vs {}",
        a.len(),
        b.len()
    );
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .fold(V::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Euclidean norm `sqrt(dot(a, a))`, accumulated in `f64`.
pub fn norm<T: Scalar>(a: &impl NdRead<T, 1>) -> f64 {
    a.as_slice()
        .iter()
        .fold(0.0f64, |acc, &x| {
            let v = to_f64(x);
            acc + v * v
        })
        .sqrt()
}

macro_rules! impl_elementwise {
    ($tr:ident, $m:ident) => {
        impl<T, U, V, const R: usize> $tr<&Array<U, R>> for &Array<T, R>
        where
            T: Scalar + $tr<U, Output = V>,
            U: Scalar,
            V: Scalar,
        {
            type Output = Array<V, R>;
            fn $m(self, rhs: &Array<U, R>) -> Array<V, R> {
                zip_with(self, rhs, |x, y| x.$m(y))
            }
        }

        impl<'b, T, U, V, const R: usize> $tr<ArrayView<'b, U, R>> for &Array<T, R>
        where
            T: Scalar + $tr<U, Output = V>,
            U: Scalar,
            V: Scalar,
        {
            type Output = Array<V, R>;
            fn $m(self, rhs: ArrayView<'b, U, R>) -> Array<V, R> {
                zip_with(self, &rhs, |x, y| x.$m(y))
            }
        }

        impl<'a, T, U, V, const R: usize> $tr<&Array<U, R>> for ArrayView<'a, T, R>
        where
            T: Scalar + $tr<U, Output = V>,
            U: Scalar,
            V: Scalar,
        {
            type Output = Array<V, R>;
            fn $m(self, rhs: &Array<U, R>) -> Array<V, R> {
                zip_with(&self, rhs, |x, y| x.$m(y))
            }
        }

        impl<'a, 'b, T, U, V, const R: usize> $tr<ArrayView<'b, U, R>> for ArrayView<'a, T, R>
        where
            T: Scalar + $tr<U, Output = V>,
            U: Scalar,
            V: Scalar,
        {
            type Output = Array<V, R>;
            fn $m(self, rhs: ArrayView<'b, U, R>) -> Array<V, R> {
                zip_with(&self, &rhs, |x, y| x.$m(y))
            }
        }
    };
}

impl_elementwise!(Add, add);
impl_elementwise!(Sub, sub);
impl_elementwise!(Mul, mul);
impl_elementwise!(Div, div);

macro_rules! impl_scalar_ops {
    (@one $prim:ty, $tr:ident, $m:ident) => {
        impl<T, V, const R: usize> $tr<$prim> for &Array<T, R>
        where
            T: Scalar + $tr<$prim, Output = V>,
            V: Scalar,
        {
            type Output = Array<V, R>;
            fn $m(self, rhs: $prim) -> Array<V, R> {
                map(self, |x| x.$m(rhs))
            }
        }

        impl<'a, T, V, const R: usize> $tr<$prim> for ArrayView<'a, T, R>
        where
            T: Scalar + $tr<$prim, Output = V>,
            V: Scalar,
        {
            type Output = Array<V, R>;
            fn $m(self, rhs: $prim) -> Array<V, R> {
                map(&self, |x| x.$m(rhs))
            }
        }

        impl<T, V, const R: usize> $tr<&Array<T, R>> for $prim
        where
            $prim: $tr<T, Output = V>,
            T: Scalar,
            V: Scalar,
        {
            type Output = Array<V, R>;
            fn $m(self, rhs: &Array<T, R>) -> Array<V, R> {
                map(rhs, |x| self.$m(x))
            }
        }

        impl<'a, T, V, const R: usize> $tr<ArrayView<'a, T, R>> for $prim
        where
            $prim: $tr<T, Output = V>,
            T: Scalar,
            V: Scalar,
        {
            type Output = Array<V, R>;
            fn $m(self, rhs: ArrayView<'a, T, R>) -> Array<V, R> {
                map(&rhs, |x| self.$m(x))
            }
        }
    };
    ($($prim:ty),* $(,)?) => {$(
        impl_scalar_ops!(@one $prim, Add, add);
        impl_scalar_ops!(@one $prim, Sub, sub);
        impl_scalar_ops!(@one $prim, Mul, mul);
        impl_scalar_ops!(@one $prim, Div, div);
    )*};
}

impl_scalar_ops!(f32, f64, i32, i64, u32, u64, usize);
