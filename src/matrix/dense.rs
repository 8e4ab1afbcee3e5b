//! Dense row-major matrix implementation

use num_traits::Num;
use std::fmt;

/// A dense matrix stored in row-major order
///
/// The matrix stores all `n_rows * n_cols` elements in a single contiguous
/// vector, with element `(i, j)` at index `i * n_cols + j`.
///
/// The recursive multiplication algorithms in this crate operate on square
/// matrices whose side length is a power of two; the type itself supports
/// any rectangular shape.
#[derive(Clone, PartialEq, Eq)]
pub struct DenseMatrix<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Element storage, row-major (size: n_rows * n_cols)
    pub data: Vec<T>,
}

impl<T> DenseMatrix<T>
where
    T: Copy + Num,
{
    /// Creates a new dense matrix with the given dimensions and row-major data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not `n_rows * n_cols`.
    pub fn new(n_rows: usize, n_cols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            n_rows * n_cols,
            "data.len() must be n_rows * n_cols"
        );

        Self {
            n_rows,
            n_cols,
            data,
        }
    }

    /// Creates a matrix from nested row vectors
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged (not all the same length).
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            assert_eq!(row.len(), n_cols, "all rows must have the same length");
            data.extend_from_slice(row);
        }

        Self {
            n_rows,
            n_cols,
            data,
        }
    }

    /// Creates an all-zero matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            data: vec![T::zero(); n_rows * n_cols],
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix.set(i, i, T::one());
        }
        matrix
    }

    /// Returns the element at `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.n_rows && col < self.n_cols, "index out of bounds");
        self.data[row * self.n_cols + col]
    }

    /// Sets the element at `(row, col)`
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.n_rows && col < self.n_cols, "index out of bounds");
        self.data[row * self.n_cols + col] = value;
    }

    /// Returns true if the matrix is square
    pub fn is_square(&self) -> bool {
        self.n_rows == self.n_cols
    }

    /// Returns the side length of a square matrix
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn n(&self) -> usize {
        assert!(self.is_square(), "matrix must be square");
        self.n_rows
    }

    /// Returns row `i` as a slice
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.n_rows, "Row index out of bounds");
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DenseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;

        // Print a sample of the matrix content
        let max_rows_to_print = 8.min(self.n_rows);
        let max_cols_to_print = 8.min(self.n_cols);

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;

                for j in 0..max_cols_to_print {
                    write!(f, "{:?} ", self.get(i, j))?;
                }

                if self.n_cols > max_cols_to_print {
                    write!(f, "... ({} more)", self.n_cols - max_cols_to_print)?;
                }

                writeln!(f)?;
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
