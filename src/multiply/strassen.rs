//! Strassen's seven-multiplication recursive algorithm
//!
//! Naive block decomposition needs eight half-size multiplications per
//! level; Strassen's identities get it down to seven at the cost of
//! extra additions and subtractions, giving the O(n^2.807) bound.

use num_traits::Num;
use std::ops::AddAssign;

use crate::matrix::{add, split_quadrants, sub, write_quadrant, DenseMatrix};

/// Multiplies two square matrices with Strassen's algorithm
///
/// The recursion bottoms out at `n == 2` with the four direct scalar
/// formulas — the seven-product identities are only defined for
/// `n >= 2`, so this algorithm never recurses down to 1×1 (the
/// asymmetry with [`divide_conquer_multiply`] is deliberate).
///
/// Each level computes seven half-size products:
///
/// ```text
/// P = (A11+A22)·(B11+B22)    Q = (A21+A22)·B11
/// R = A11·(B12−B22)          S = A22·(B21−B11)
/// T = (A11+A12)·B22          U = (A21−A11)·(B11+B12)
/// V = (A12−A22)·(B21+B22)
/// ```
///
/// and recombines them as `C11 = P+S−T+V`, `C12 = R+T`, `C21 = Q+S`,
/// `C22 = P+R−Q+U`.
///
/// Returns a new matrix; neither input is modified.
///
/// # Panics
///
/// Panics if the inputs are not square of equal dimension, or if the
/// dimension is not a power of two with `n >= 2`.
///
/// [`divide_conquer_multiply`]: crate::multiply::divide_conquer_multiply
pub fn strassen_multiply<T>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T>
where
    T: Copy + Num + AddAssign,
{
    assert!(
        a.is_square() && b.is_square() && a.n_rows == b.n_rows,
        "Matrix dimensions must be square and equal for multiplication"
    );
    assert!(
        a.n() >= 2 && a.n().is_power_of_two(),
        "Matrix dimension must be a power of two >= 2 for Strassen"
    );

    multiply_recursive(a, b)
}

fn multiply_recursive<T>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T>
where
    T: Copy + Num + AddAssign,
{
    let n = a.n();

    if n == 2 {
        return multiply_2x2(a, b);
    }

    let half = n / 2;
    let [a11, a12, a21, a22] = split_quadrants(a);
    let [b11, b12, b21, b22] = split_quadrants(b);

    let p = multiply_recursive(&add(&a11, &a22), &add(&b11, &b22));
    let q = multiply_recursive(&add(&a21, &a22), &b11);
    let r = multiply_recursive(&a11, &sub(&b12, &b22));
    let s = multiply_recursive(&a22, &sub(&b21, &b11));
    let t = multiply_recursive(&add(&a11, &a12), &b22);
    let u = multiply_recursive(&sub(&a21, &a11), &add(&b11, &b12));
    let v = multiply_recursive(&sub(&a12, &a22), &add(&b21, &b22));

    let c11 = add(&sub(&add(&p, &s), &t), &v);
    let c12 = add(&r, &t);
    let c21 = add(&q, &s);
    let c22 = add(&sub(&add(&p, &r), &q), &u);

    let mut c = DenseMatrix::zeros(n, n);
    write_quadrant(&c11, &mut c, 0, 0);
    write_quadrant(&c12, &mut c, 0, half);
    write_quadrant(&c21, &mut c, half, 0);
    write_quadrant(&c22, &mut c, half, half);

    c
}

/// Direct 2×2 product, the recursion base case
fn multiply_2x2<T>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T>
where
    T: Copy + Num,
{
    DenseMatrix::new(
        2,
        2,
        vec![
            a.get(0, 0) * b.get(0, 0) + a.get(0, 1) * b.get(1, 0),
            a.get(0, 0) * b.get(0, 1) + a.get(0, 1) * b.get(1, 1),
            a.get(1, 0) * b.get(0, 0) + a.get(1, 1) * b.get(1, 0),
            a.get(1, 0) * b.get(0, 1) + a.get(1, 1) * b.get(1, 1),
        ],
    )
}
