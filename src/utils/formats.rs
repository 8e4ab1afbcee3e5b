//! Utilities for converting between our matrix format and external libraries

use ndarray::Array2;
use num_traits::Num;

use crate::matrix::DenseMatrix;

/// Converts our dense matrix format to an ndarray `Array2`
pub fn to_ndarray<T>(matrix: &DenseMatrix<T>) -> Array2<T>
where
    T: Copy + Num,
{
    Array2::from_shape_vec((matrix.n_rows, matrix.n_cols), matrix.data.clone())
        .expect("dimensions are consistent by construction")
}

/// Converts an ndarray `Array2` to our dense matrix format
pub fn from_ndarray<T>(array: Array2<T>) -> DenseMatrix<T>
where
    T: Copy + Num,
{
    let (n_rows, n_cols) = array.dim();
    let data = if array.is_standard_layout() {
        array.into_raw_vec()
    } else {
        array.iter().copied().collect()
    };

    DenseMatrix::new(n_rows, n_cols, data)
}
