//! Fixed-rank strided arrays over contiguous row-major storage.
//!
//! Purpose
//! - One array abstraction with two storage modes: `Array` owns a
//!   reference-counted buffer (handles clone in O(1) and share storage),
//!   `ArrayView`/`ArrayViewMut` borrow someone else's buffer.
//! - A common readable interface (`NdRead`) so algorithms can slice rows of
//!   a point matrix as zero-copy 1-D views and still allocate fresh result
//!   arrays where they must.
//!
//! Why this design
//! - The element-access hot path is stride arithmetic only; ownership never
//!   enters indexing.
//! - Mutability is a capability, not a runtime flag: `ArrayView` simply does
//!   not implement `NdWrite` or `IndexMut`, so writing through a read-only
//!   view is a compile error.
//!
//! Contracts
//! - Shape is fixed at construction; `len() == product(shape)` always holds
//!   and `as_slice()` is exactly that long.
//! - Precondition violations (shape/index/rank misuse) panic; they are
//!   caller bugs, not recoverable conditions.

mod array;
mod ops;
mod scalar;

pub use array::{row_major_strides, Array, ArrayView, ArrayViewMut, NdRead, NdWrite};
pub use ops::{dot, map, norm, zip_with};
pub use scalar::{to_f64, Scalar};

/// Per-dimension extents of a rank-`R` array.
pub type Shape<const R: usize> = [usize; R];

/// Per-dimension element offsets of a rank-`R` array.
pub type Stride<const R: usize> = [usize; R];

#[cfg(test)]
mod tests;
