//! # blockmul: dense matrix multiplication three ways
//!
//! This library multiplies square integer matrices with three algorithms
//! of increasing structural sophistication:
//!
//! 1. **Classical**: the triple-nested-loop O(n³) reference, valid for any
//!    square size.
//!
//! 2. **Divide-and-conquer**: recursive quadrant decomposition with eight
//!    half-size products per level. Still Θ(n³), but the structural
//!    template for the next step. Requires power-of-two sizes.
//!
//! 3. **Strassen**: seven half-size products per level instead of eight,
//!    trading extra additions for the O(n^2.807) bound. Requires
//!    power-of-two sizes with `n >= 2`.
//!
//! The three are peers, not layers: a caller picks exactly one. All of
//! them return a newly allocated result and never mutate their inputs,
//! which keeps the deep recursion trees free of aliasing.
//!
//! ## Usage
//!
//! Basic multiplication:
//!
//! ```
//! use blockmul::{classic_multiply, strassen_multiply, DenseMatrix};
//!
//! let a = DenseMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
//! let b = DenseMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
//!
//! let c = classic_multiply(&a, &b);
//! assert_eq!(c, strassen_multiply(&a, &b));
//! assert_eq!(c.data, vec![19, 22, 43, 50]);
//! ```
//!
//! Strategy selection through the dispatch entry point:
//!
//! ```
//! use blockmul::{multiply, Algorithm, DenseMatrix};
//!
//! let a = DenseMatrix::<i64>::identity(4);
//! let b = DenseMatrix::<i64>::identity(4);
//!
//! let c = multiply(&a, &b, Algorithm::DivideConquer);
//! assert_eq!(c, a);
//! ```

pub mod matrix;
pub mod multiply;
pub mod utils;

// Re-export primary components
pub use matrix::{add, extract_quadrant, split_quadrants, sub, write_quadrant, DenseMatrix};
pub use multiply::{
    classic_multiply, divide_conquer_multiply, multiply, strassen_multiply, Algorithm,
};
pub use utils::{from_ndarray, to_ndarray};

/// Version information for the blockmul library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
