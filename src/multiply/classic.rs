//! Classical triple-loop matrix multiplication
//!
//! This provides a baseline for correctness testing and performance comparison.
//! The recursive algorithms are validated against it in the integration tests.

use num_traits::Num;
use std::ops::AddAssign;

use crate::matrix::DenseMatrix;

/// Multiplies two square matrices with the classical O(n³) triple loop
///
/// For each output cell, accumulates `sum over k of a[i][k] * b[k][j]`
/// starting from zero. Works for any square size `n >= 1`; unlike the
/// recursive algorithms it has no power-of-two requirement.
///
/// Returns a new matrix; neither input is modified.
///
/// # Panics
///
/// Panics if the inputs are not square or their dimensions differ.
pub fn classic_multiply<T>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T>
where
    T: Copy + Num + AddAssign,
{
    assert!(
        a.is_square() && b.is_square() && a.n_rows == b.n_rows,
        "Matrix dimensions must be square and equal for multiplication"
    );

    let n = a.n();
    let mut c = DenseMatrix::zeros(n, n);

    for i in 0..n {
        for j in 0..n {
            let mut sum = T::zero();
            for k in 0..n {
                sum += a.get(i, k) * b.get(k, j);
            }
            c.set(i, j, sum);
        }
    }

    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2x2_multiplication() {
        // A = [1 2; 3 4], B = [5 6; 7 8]
        // Expected: C = [19 22; 43 50]
        let a = DenseMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
        let b = DenseMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]);

        let c = classic_multiply(&a, &b);
        assert_eq!(c.data, vec![19, 22, 43, 50]);
    }

    #[test]
    fn test_1x1_multiplication() {
        let a = DenseMatrix::from_rows(vec![vec![7]]);
        let b = DenseMatrix::from_rows(vec![vec![6]]);

        let c = classic_multiply(&a, &b);
        assert_eq!(c.data, vec![42]);
    }

    #[test]
    fn test_3x3_non_power_of_two() {
        let a = DenseMatrix::from_rows(vec![vec![1, 0, 2], vec![0, 3, 0], vec![4, 0, 5]]);
        let identity = DenseMatrix::identity(3);

        let c = classic_multiply(&a, &identity);
        assert_eq!(c, a);
    }

    #[test]
    #[should_panic(expected = "square and equal")]
    fn test_dimension_mismatch() {
        let a = DenseMatrix::<i32>::zeros(2, 2);
        let b = DenseMatrix::<i32>::zeros(4, 4);
        classic_multiply(&a, &b);
    }
}
