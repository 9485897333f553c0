use super::*;

#[test]
fn strides_are_row_major() {
    assert_eq!(row_major_strides([5]), [1]);
    assert_eq!(row_major_strides([3, 4]), [4, 1]);
    assert_eq!(row_major_strides([2, 3, 4]), [12, 4, 1]);
}

#[test]
fn factories_allocate_product_of_shape() {
    let z = Array::<f64, 2>::zeros([3, 4]);
    assert_eq!(z.shape(), [3, 4]);
    assert_eq!(z.len(), 12);
    assert_eq!(z.rank(), 2);
    assert!(z.as_slice().iter().all(|&x| x == 0.0));

    let o = Array::<i32, 1>::ones([5]);
    assert!(o.as_slice().iter().all(|&x| x == 1));

    let f = Array::<f64, 2>::full([2, 2], 7.5);
    assert!(f.as_slice().iter().all(|&x| x == 7.5));

    let e = Array::<u64, 1>::empty([0]);
    assert!(e.is_empty());
}

#[test]
#[should_panic(expected = "does not match shape")]
fn from_vec_rejects_wrong_length() {
    let _ = Array::<i32, 2>::from_vec(vec![1, 2, 3], [2, 2]);
}

#[test]
fn multi_index_and_flat_index_agree() {
    let a = Array::<i32, 2>::from_vec((0..12).collect(), [3, 4]);
    assert_eq!(a[[0, 0]], 0);
    assert_eq!(a[[1, 2]], 6);
    assert_eq!(a[[2, 3]], 11);
    assert_eq!(a.get([1, 2]), a.at(6));
    assert_eq!(a[6], 6);
}

#[test]
#[should_panic(expected = "out of bounds for axis 1")]
fn multi_index_out_of_range_panics() {
    let a = Array::<i32, 2>::zeros([3, 4]);
    let _ = a[[0, 4]];
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn flat_index_checked_against_total_size() {
    let a = Array::<i32, 2>::zeros([3, 4]);
    let _ = a.at(12);
}

#[test]
fn clone_is_shallow_and_writes_detach() {
    let mut a = Array::<i32, 1>::zeros([4]);
    let b = a.clone();
    assert_eq!(a.handle_count(), 2);
    assert_eq!(b.handle_count(), 2);

    // Copy-on-write: the write detaches `a` from the shared buffer.
    a[[0]] = 9;
    assert_eq!(a[[0]], 9);
    assert_eq!(b[[0]], 0);
    assert_eq!(b.handle_count(), 1);
}

#[test]
fn views_borrow_external_buffers() {
    let data = [1, 2, 3, 4, 5, 6];
    let v = ArrayView::<i32, 2>::new(&data, [2, 3]);
    assert_eq!(v.shape(), [2, 3]);
    assert_eq!(v[[1, 2]], 6);

    let mut buf = [0.0f64; 4];
    let mut m = ArrayViewMut::<f64, 2>::new(&mut buf, [2, 2]);
    m.set([1, 1], 2.5);
    m[[0, 0]] = 1.0;
    drop(m);
    assert_eq!(buf, [1.0, 0.0, 0.0, 2.5]);
}

#[test]
fn owning_arrays_write_through_view_mut_and_nd_write() {
    let mut a = Array::<i32, 2>::zeros([2, 2]);
    let shared = a.clone();

    // `view_mut` detaches the shared buffer before handing out the slice.
    let mut m = a.view_mut();
    m.set([0, 1], 5);
    m.as_mut_slice()[2] = 7;
    drop(m);
    assert_eq!(a.as_slice(), &[0, 5, 7, 0]);
    assert_eq!(shared.as_slice(), &[0, 0, 0, 0]);

    // The owning array implements `NdWrite` directly as well.
    a.set([1, 1], 9);
    *a.get_mut([0, 0]) = 1;
    assert_eq!(a.as_slice(), &[1, 5, 7, 9]);
}

#[test]
#[should_panic(expected = "too small for shape")]
fn view_rejects_short_buffer() {
    let data = [1, 2, 3];
    let _ = ArrayView::<i32, 2>::new(&data, [2, 2]);
}

#[test]
fn row_views_are_zero_copy_slices() {
    let pts = Array::<f64, 2>::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], [3, 2]);
    let r1 = pts.row(1);
    assert_eq!(r1.shape(), [2]);
    assert_eq!(r1.as_slice(), &[3.0, 4.0]);

    let v = pts.view();
    let r2 = v.row(2);
    assert_eq!(r2.as_slice(), &[5.0, 6.0]);
}

#[test]
fn elementwise_ops_allocate_results() {
    let a = Array::<f64, 1>::from_vec(vec![1.0, 2.0, 3.0], [3]);
    let b = Array::<f64, 1>::from_vec(vec![4.0, 5.0, 6.0], [3]);
    assert_eq!((&a + &b).as_slice(), &[5.0, 7.0, 9.0]);
    assert_eq!((&b - &a).as_slice(), &[3.0, 3.0, 3.0]);
    assert_eq!((&a * &b).as_slice(), &[4.0, 10.0, 18.0]);
    assert_eq!((&b / &a).as_slice(), &[4.0, 2.5, 2.0]);

    // View operands and mixed view/array operands.
    assert_eq!((a.view() + b.view()).as_slice(), &[5.0, 7.0, 9.0]);
    assert_eq!((a.view() + &b).as_slice(), &[5.0, 7.0, 9.0]);
    assert_eq!((&a + b.view()).as_slice(), &[5.0, 7.0, 9.0]);
}

#[test]
#[should_panic(expected = "shape mismatch")]
fn elementwise_ops_reject_shape_mismatch() {
    let a = Array::<f64, 1>::zeros([3]);
    let b = Array::<f64, 1>::zeros([4]);
    let _ = &a + &b;
}

#[test]
fn scalar_ops_broadcast_without_shape_checks() {
    let a = Array::<f64, 1>::from_vec(vec![1.0, 2.0, 4.0], [3]);
    assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0, 8.0]);
    assert_eq!((&a + 1.0).as_slice(), &[2.0, 3.0, 5.0]);
    assert_eq!((&a - 1.0).as_slice(), &[0.0, 1.0, 3.0]);
    assert_eq!((&a / 2.0).as_slice(), &[0.5, 1.0, 2.0]);

    // Scalar on the left.
    assert_eq!((2.0 * &a).as_slice(), &[2.0, 4.0, 8.0]);
    assert_eq!((8.0 / &a).as_slice(), &[8.0, 4.0, 2.0]);
    assert_eq!((1.0 + a.view()).as_slice(), &[2.0, 3.0, 5.0]);
    assert_eq!((a.view() * 3.0).as_slice(), &[3.0, 6.0, 12.0]);

    let i = Array::<i32, 2>::ones([2, 2]);
    assert_eq!((&i * 3).as_slice(), &[3, 3, 3, 3]);
}

#[test]
fn dot_and_norm_reduce_rank_one_arrays() {
    let a = Array::<f64, 1>::from_vec(vec![3.0, 4.0], [2]);
    let b = Array::<f64, 1>::from_vec(vec![2.0, -1.0], [2]);
    assert_eq!(dot(&a, &b), 2.0);
    assert_eq!(norm(&a), 5.0);

    let i = Array::<i32, 1>::from_vec(vec![1, 2, 3], [3]);
    let j = Array::<i32, 1>::from_vec(vec![4, 5, 6], [3]);
    assert_eq!(dot(&i, &j), 32);
    assert!((norm(&i) - 14.0f64.sqrt()).abs() < 1e-12);
}

#[test]
#[should_panic(expected = "length mismatch")]
fn dot_rejects_unequal_lengths() {
    let a = Array::<f64, 1>::zeros([2]);
    let b = Array::<f64, 1>::zeros([3]);
    let _ = dot(&a, &b);
}

#[test]
fn copy_is_deep() {
    let mut a = Array::<i32, 2>::from_vec(vec![1, 2, 3, 4], [2, 2]);
    let c = a.copy();
    a[[0, 0]] = 99;
    assert_eq!(c[[0, 0]], 1);
    assert_eq!(c.shape(), a.shape());

    // Views deep-copy into owning arrays too.
    let data = [7, 8];
    let v = ArrayView::<i32, 1>::new(&data, [2]);
    let owned = v.copy();
    assert_eq!(owned.as_slice(), &[7, 8]);
}

#[test]
fn zip_with_and_map_follow_shape() {
    let a = Array::<i32, 1>::from_vec(vec![1, 2, 3], [3]);
    let b = Array::<i32, 1>::from_vec(vec![10, 20, 30], [3]);
    let m = zip_with(&a, &b, |x, y| x.max(y));
    assert_eq!(m.as_slice(), &[10, 20, 30]);
    let d = map(&a, |x| x * x);
    assert_eq!(d.as_slice(), &[1, 4, 9]);
}
