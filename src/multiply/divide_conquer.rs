//! Divide-and-conquer block multiplication
//!
//! Computes the same product as the classical algorithm via recursive
//! quadrant decomposition. Still Θ(n³) — each level replaces one
//! multiplication with eight half-size ones — but structurally the
//! stepping stone to Strassen's algorithm.

use num_traits::Num;
use std::ops::AddAssign;

use crate::matrix::{add, split_quadrants, write_quadrant, DenseMatrix};

/// Multiplies two square matrices by recursive block decomposition
///
/// Base case `n == 1` is the scalar product. Otherwise both inputs are
/// split into four quadrants and the result quadrants follow the block
/// identity:
///
/// ```text
/// C11 = A11·B11 + A12·B21    C12 = A11·B12 + A12·B22
/// C21 = A21·B11 + A22·B21    C22 = A21·B12 + A22·B22
/// ```
///
/// Returns a new matrix; neither input is modified.
///
/// # Panics
///
/// Panics if the inputs are not square of equal dimension, or if the
/// dimension is not a power of two (required for clean recursive halving).
pub fn divide_conquer_multiply<T>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T>
where
    T: Copy + Num + AddAssign,
{
    assert!(
        a.is_square() && b.is_square() && a.n_rows == b.n_rows,
        "Matrix dimensions must be square and equal for multiplication"
    );
    assert!(
        a.n().is_power_of_two(),
        "Matrix dimension must be a power of two for divide-and-conquer"
    );

    multiply_recursive(a, b)
}

fn multiply_recursive<T>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T>
where
    T: Copy + Num + AddAssign,
{
    let n = a.n();

    if n == 1 {
        return DenseMatrix::new(1, 1, vec![a.get(0, 0) * b.get(0, 0)]);
    }

    let half = n / 2;
    let [a11, a12, a21, a22] = split_quadrants(a);
    let [b11, b12, b21, b22] = split_quadrants(b);

    let c11 = add(
        &multiply_recursive(&a11, &b11),
        &multiply_recursive(&a12, &b21),
    );
    let c12 = add(
        &multiply_recursive(&a11, &b12),
        &multiply_recursive(&a12, &b22),
    );
    let c21 = add(
        &multiply_recursive(&a21, &b11),
        &multiply_recursive(&a22, &b21),
    );
    let c22 = add(
        &multiply_recursive(&a21, &b12),
        &multiply_recursive(&a22, &b22),
    );

    let mut c = DenseMatrix::zeros(n, n);
    write_quadrant(&c11, &mut c, 0, 0);
    write_quadrant(&c12, &mut c, 0, half);
    write_quadrant(&c21, &mut c, half, 0);
    write_quadrant(&c22, &mut c, half, half);

    c
}
