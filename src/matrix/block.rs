//! Quadrant extraction and write-back for block-recursive multiplication
//!
//! Both recursive multipliers decompose an n×n matrix into four
//! (n/2)×(n/2) quadrants, recurse on the quadrants, and write the
//! quadrant results back into a freshly allocated output. These are the
//! only two data movements the recursions need.

use num_traits::Num;

use crate::matrix::DenseMatrix;

/// Copies a contiguous square block out of `source` into a new matrix
///
/// The block starts at `(row_offset, col_offset)` and spans
/// `quadrant_size` rows and columns. `source` is not modified.
///
/// # Panics
///
/// Panics if the block does not fit inside `source`.
pub fn extract_quadrant<T>(
    source: &DenseMatrix<T>,
    row_offset: usize,
    col_offset: usize,
    quadrant_size: usize,
) -> DenseMatrix<T>
where
    T: Copy + Num,
{
    assert!(
        row_offset + quadrant_size <= source.n_rows
            && col_offset + quadrant_size <= source.n_cols,
        "quadrant exceeds source bounds"
    );

    let mut block = DenseMatrix::zeros(quadrant_size, quadrant_size);
    for i in 0..quadrant_size {
        for j in 0..quadrant_size {
            block.set(i, j, source.get(row_offset + i, col_offset + j));
        }
    }
    block
}

/// Copies every element of `block` into `dest` starting at
/// `(row_offset, col_offset)`
///
/// This is the one in-place mutation in the crate: `dest` is always a
/// freshly allocated accumulator owned by the caller of the recursive
/// step.
///
/// # Panics
///
/// Panics if the block does not fit inside `dest`.
pub fn write_quadrant<T>(
    block: &DenseMatrix<T>,
    dest: &mut DenseMatrix<T>,
    row_offset: usize,
    col_offset: usize,
) where
    T: Copy + Num,
{
    assert!(
        row_offset + block.n_rows <= dest.n_rows && col_offset + block.n_cols <= dest.n_cols,
        "quadrant exceeds destination bounds"
    );

    for i in 0..block.n_rows {
        for j in 0..block.n_cols {
            dest.set(row_offset + i, col_offset + j, block.get(i, j));
        }
    }
}

/// Splits a square matrix into its four quadrants
///
/// Returns `[top_left, top_right, bottom_left, bottom_right]`, each
/// a newly allocated (n/2)×(n/2) matrix.
///
/// # Panics
///
/// Panics if the matrix is not square with even side length.
pub fn split_quadrants<T>(matrix: &DenseMatrix<T>) -> [DenseMatrix<T>; 4]
where
    T: Copy + Num,
{
    let n = matrix.n();
    assert_eq!(n % 2, 0, "side length must be even to split into quadrants");
    let half = n / 2;

    [
        extract_quadrant(matrix, 0, 0, half),
        extract_quadrant(matrix, 0, half, half),
        extract_quadrant(matrix, half, 0, half),
        extract_quadrant(matrix, half, half, half),
    ]
}
