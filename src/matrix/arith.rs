//! Element-wise addition and subtraction of equal-size matrices

use num_traits::Num;

use crate::matrix::DenseMatrix;

/// Returns the element-wise sum `a + b` as a new matrix
///
/// Neither input is modified.
///
/// # Panics
///
/// Panics if the matrices have different dimensions.
pub fn add<T>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T>
where
    T: Copy + Num,
{
    assert_eq!(
        (a.n_rows, a.n_cols),
        (b.n_rows, b.n_cols),
        "Matrix dimensions must match for addition"
    );

    let data = a
        .data
        .iter()
        .zip(&b.data)
        .map(|(&x, &y)| x + y)
        .collect();

    DenseMatrix::new(a.n_rows, a.n_cols, data)
}

/// Returns the element-wise difference `a - b` as a new matrix
///
/// Neither input is modified.
///
/// # Panics
///
/// Panics if the matrices have different dimensions.
pub fn sub<T>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T>
where
    T: Copy + Num,
{
    assert_eq!(
        (a.n_rows, a.n_cols),
        (b.n_rows, b.n_cols),
        "Matrix dimensions must match for subtraction"
    );

    let data = a
        .data
        .iter()
        .zip(&b.data)
        .map(|(&x, &y)| x - y)
        .collect();

    DenseMatrix::new(a.n_rows, a.n_cols, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let a = DenseMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
        let b = DenseMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]);

        let sum = add(&a, &b);
        assert_eq!(sum.data, vec![6, 8, 10, 12]);
    }

    #[test]
    fn test_sub() {
        let a = DenseMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
        let b = DenseMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);

        let diff = sub(&a, &b);
        assert_eq!(diff.data, vec![4, 4, 4, 4]);
    }

    #[test]
    fn test_inputs_unchanged() {
        let a = DenseMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
        let b = DenseMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
        let a_before = a.clone();
        let b_before = b.clone();

        let _ = add(&a, &b);
        let _ = sub(&a, &b);

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    #[should_panic(expected = "Matrix dimensions must match for addition")]
    fn test_add_dimension_mismatch() {
        let a = DenseMatrix::<i32>::zeros(2, 2);
        let b = DenseMatrix::<i32>::zeros(3, 3);
        add(&a, &b);
    }
}
