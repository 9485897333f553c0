//! Owning and borrowing array types behind the `NdRead`/`NdWrite` capabilities.

use std::ops::{Index, IndexMut};
use std::rc::Rc;

use super::scalar::Scalar;
use super::{Shape, Stride};

/// Row-major strides for `shape`: `stride[i] = product(shape[i+1..R])`,
/// `stride[R-1] = 1`.
#[inline]
pub fn row_major_strides<const R: usize>(shape: Shape<R>) -> Stride<R> {
    let mut strides = [1usize; R];
    let mut acc = 1usize;
    let mut i = R;
    while i > 0 {
        i -= 1;
        strides[i] = acc;
        acc *= shape[i];
    }
    strides
}

/// Flat offset of a multi-index, validated per axis.
#[inline]
fn ravel<const R: usize>(idx: [usize; R], shape: &Shape<R>, strides: &Stride<R>) -> usize {
    let mut offset = 0usize;
    for k in 0..R {
        assert!(
            idx[k] < shape[k],
            "index {} out of bounds for axis {} with extent {}",
            idx[k],
            k,
            shape[k]
        );
        offset += idx[k] * strides[k];
    }
    offset
}

/// Readable rank-`R` array: shape, strides, and element access.
///
/// Implemented by owning arrays and by both view flavors, so call sites are
/// agnostic to which storage mode they hold.
///
/// Invariant: `as_slice().len() == product(shape())`.
pub trait NdRead<T: Scalar, const R: usize> {
    fn shape(&self) -> Shape<R>;
    fn strides(&self) -> Stride<R>;
    /// All elements in row-major storage order.
    fn as_slice(&self) -> &[T];

    /// Number of dimensions.
    #[inline]
    fn rank(&self) -> usize {
        R
    }

    /// Total number of elements.
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Element at a multi-index.
    ///
    /// # Panics
    /// If any `idx[k] >= shape()[k]`.
    #[inline]
    fn get(&self, idx: [usize; R]) -> T {
        self.as_slice()[ravel(idx, &self.shape(), &self.strides())]
    }

    /// Element at a flat storage offset, checked only against `len()`.
    ///
    /// # Panics
    /// If `flat >= len()`.
    #[inline]
    fn at(&self, flat: usize) -> T {
        self.as_slice()[flat]
    }

    /// Deep-copy the elements into a freshly allocated owning array.
    fn copy(&self) -> Array<T, R> {
        Array::from_vec(self.as_slice().to_vec(), self.shape())
    }
}

/// Writable rank-`R` array. Read-only views do not implement this, so
/// mutating through one is a compile error rather than a runtime check.
pub trait NdWrite<T: Scalar, const R: usize>: NdRead<T, R> {
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Mutable element at a multi-index.
    ///
    /// # Panics
    /// If any `idx[k] >= shape()[k]`.
    #[inline]
    fn get_mut(&mut self, idx: [usize; R]) -> &mut T {
        let offset = ravel(idx, &self.shape(), &self.strides());
        &mut self.as_mut_slice()[offset]
    }

    #[inline]
    fn set(&mut self, idx: [usize; R], value: T) {
        *self.get_mut(idx) = value;
    }
}

/// Owning rank-`R` array over a reference-counted contiguous buffer.
///
/// `Clone` is shallow: it copies the handle, not the storage. Writing
/// through a handle whose buffer is shared detaches it first
/// (`Rc::make_mut` copy-on-write), so handles never observe each other's
/// writes. This is the safe-Rust rendering of shared-buffer semantics.
#[derive(Debug)]
pub struct Array<T, const R: usize> {
    data: Rc<Vec<T>>,
    shape: Shape<R>,
    strides: Stride<R>,
}

impl<T, const R: usize> Clone for Array<T, R> {
    /// Shallow copy; the new handle shares the same buffer.
    fn clone(&self) -> Self {
        Self {
            data: Rc::clone(&self.data),
            shape: self.shape,
            strides: self.strides,
        }
    }
}

impl<T: Scalar, const R: usize> Array<T, R> {
    /// Take ownership of a flat buffer with the given shape.
    ///
    /// # Panics
    /// If `data.len() != product(shape)`.
    pub fn from_vec(data: Vec<T>, shape: Shape<R>) -> Self {
        let len: usize = shape.iter().product();
        assert!(
            data.len() == len,
            "buffer of {} elements does not match shape {:?}",
            data.len(),
            shape
        );
        Self {
            data: Rc::new(data),
            shape,
            strides: row_major_strides(shape),
        }
    }

    /// Allocate `product(shape)` elements. Zero-initialized: Rust offers no
    /// safe uninitialized allocation, so this is `zeros` under another name.
    pub fn empty(shape: Shape<R>) -> Self {
        Self::zeros(shape)
    }

    /// Every element set to `value`.
    pub fn full(shape: Shape<R>, value: T) -> Self {
        let len: usize = shape.iter().product();
        Self::from_vec(vec![value; len], shape)
    }

    pub fn zeros(shape: Shape<R>) -> Self {
        Self::full(shape, T::zero())
    }

    pub fn ones(shape: Shape<R>) -> Self {
        Self::full(shape, T::one())
    }

    /// Borrow the whole array as a read-only view.
    #[inline]
    pub fn view(&self) -> ArrayView<'_, T, R> {
        ArrayView {
            data: &self.data,
            shape: self.shape,
            strides: self.strides,
        }
    }

    /// Borrow the whole array as a mutable view (detaches a shared buffer).
    #[inline]
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, T, R> {
        let shape = self.shape;
        let strides = self.strides;
        ArrayViewMut {
            data: Rc::make_mut(&mut self.data).as_mut_slice(),
            shape,
            strides,
        }
    }

    /// Number of live handles sharing this buffer.
    #[inline]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.data)
    }
}

impl<T: Scalar> Array<T, 2> {
    /// Zero-copy view of row `i` as a rank-1 array of length `shape[1]`.
    ///
    /// # Panics
    /// If `i >= shape[0]`.
    pub fn row(&self, i: usize) -> ArrayView<'_, T, 1> {
        assert!(
            i < self.shape[0],
            "row {} out of bounds for {} rows",
            i,
            self.shape[0]
        );
        let w = self.shape[1];
        ArrayView::new(&self.data[i * w..(i + 1) * w], [w])
    }
}

impl<T: Scalar, const R: usize> NdRead<T, R> for Array<T, R> {
    #[inline]
    fn shape(&self) -> Shape<R> {
        self.shape
    }
    #[inline]
    fn strides(&self) -> Stride<R> {
        self.strides
    }
    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Scalar, const R: usize> NdWrite<T, R> for Array<T, R> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        Rc::make_mut(&mut self.data).as_mut_slice()
    }
}

/// Non-owning read-only view over a borrowed buffer.
///
/// Validity is bounded by the borrowed buffer's lifetime; there is no
/// mutating accessor, by type rather than by runtime flag.
#[derive(Clone, Copy, Debug)]
pub struct ArrayView<'a, T, const R: usize> {
    data: &'a [T],
    shape: Shape<R>,
    strides: Stride<R>,
}

impl<'a, T: Scalar, const R: usize> ArrayView<'a, T, R> {
    /// Wrap the first `product(shape)` elements of `data`.
    ///
    /// # Panics
    /// If `data` holds fewer than `product(shape)` elements.
    pub fn new(data: &'a [T], shape: Shape<R>) -> Self {
        let len: usize = shape.iter().product();
        assert!(
            data.len() >= len,
            "buffer of {} elements too small for shape {:?}",
            data.len(),
            shape
        );
        Self {
            data: &data[..len],
            shape,
            strides: row_major_strides(shape),
        }
    }
}

impl<'a, T: Scalar> ArrayView<'a, T, 2> {
    /// Zero-copy view of row `i`, keeping the original borrow's lifetime.
    ///
    /// # Panics
    /// If `i >= shape[0]`.
    pub fn row(&self, i: usize) -> ArrayView<'a, T, 1> {
        assert!(
            i < self.shape[0],
            "row {} out of bounds for {} rows",
            i,
            self.shape[0]
        );
        let w = self.shape[1];
        ArrayView::new(&self.data[i * w..(i + 1) * w], [w])
    }
}

impl<'a, T: Scalar, const R: usize> NdRead<T, R> for ArrayView<'a, T, R> {
    #[inline]
    fn shape(&self) -> Shape<R> {
        self.shape
    }
    #[inline]
    fn strides(&self) -> Stride<R> {
        self.strides
    }
    #[inline]
    fn as_slice(&self) -> &[T] {
        self.data
    }
}

/// Non-owning view over a mutably borrowed buffer.
#[derive(Debug)]
pub struct ArrayViewMut<'a, T, const R: usize> {
    data: &'a mut [T],
    shape: Shape<R>,
    strides: Stride<R>,
}

impl<'a, T: Scalar, const R: usize> ArrayViewMut<'a, T, R> {
    /// Wrap the first `product(shape)` elements of `data`.
    ///
    /// # Panics
    /// If `data` holds fewer than `product(shape)` elements.
    pub fn new(data: &'a mut [T], shape: Shape<R>) -> Self {
        let len: usize = shape.iter().product();
        assert!(
            data.len() >= len,
            "buffer of {} elements too small for shape {:?}",
            data.len(),
            shape
        );
        Self {
            data: &mut data[..len],
            shape,
            strides: row_major_strides(shape),
        }
    }
}

impl<'a, T: Scalar, const R: usize> NdRead<T, R> for ArrayViewMut<'a, T, R> {
    #[inline]
    fn shape(&self) -> Shape<R> {
        self.shape
    }
    #[inline]
    fn strides(&self) -> Stride<R> {
        self.strides
    }
    #[inline]
    fn as_slice(&self) -> &[T] {
        &*self.data
    }
}

impl<'a, T: Scalar, const R: usize> NdWrite<T, R> for ArrayViewMut<'a, T, R> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

// Operator sugar mirroring `get`/`get_mut`/`at`: multi-index with per-axis
// validation, flat index with the slice's own bound check.

impl<T: Scalar, const R: usize> Index<[usize; R]> for Array<T, R> {
    type Output = T;
    #[inline]
    fn index(&self, idx: [usize; R]) -> &T {
        &self.data[ravel(idx, &self.shape, &self.strides)]
    }
}

impl<T: Scalar, const R: usize> IndexMut<[usize; R]> for Array<T, R> {
    #[inline]
    fn index_mut(&mut self, idx: [usize; R]) -> &mut T {
        let offset = ravel(idx, &self.shape, &self.strides);
        &mut Rc::make_mut(&mut self.data)[offset]
    }
}

impl<T: Scalar, const R: usize> Index<usize> for Array<T, R> {
    type Output = T;
    #[inline]
    fn index(&self, flat: usize) -> &T {
        &self.data[flat]
    }
}

impl<T: Scalar, const R: usize> IndexMut<usize> for Array<T, R> {
    #[inline]
    fn index_mut(&mut self, flat: usize) -> &mut T {
        &mut Rc::make_mut(&mut self.data)[flat]
    }
}

impl<'a, T: Scalar, const R: usize> Index<[usize; R]> for ArrayView<'a, T, R> {
    type Output = T;
    #[inline]
    fn index(&self, idx: [usize; R]) -> &T {
        &self.data[ravel(idx, &self.shape, &self.strides)]
    }
}

impl<'a, T: Scalar, const R: usize> Index<usize> for ArrayView<'a, T, R> {
    type Output = T;
    #[inline]
    fn index(&self, flat: usize) -> &T {
        &self.data[flat]
    }
}

impl<'a, T: Scalar, const R: usize> Index<[usize; R]> for ArrayViewMut<'a, T, R> {
    type Output = T;
    #[inline]
    fn index(&self, idx: [usize; R]) -> &T {
        &self.data[ravel(idx, &self.shape, &self.strides)]
    }
}

impl<'a, T: Scalar, const R: usize> IndexMut<[usize; R]> for ArrayViewMut<'a, T, R> {
    #[inline]
    fn index_mut(&mut self, idx: [usize; R]) -> &mut T {
        let offset = ravel(idx, &self.shape, &self.strides);
        &mut self.data[offset]
    }
}

impl<'a, T: Scalar, const R: usize> Index<usize> for ArrayViewMut<'a, T, R> {
    type Output = T;
    #[inline]
    fn index(&self, flat: usize) -> &T {
        &self.data[flat]
    }
}

impl<'a, T: Scalar, const R: usize> IndexMut<usize> for ArrayViewMut<'a, T, R> {
    #[inline]
    fn index_mut(&mut self, flat: usize) -> &mut T {
        &mut self.data[flat]
    }
}
