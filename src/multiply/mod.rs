// Multiplication strategies

pub mod classic;
pub mod divide_conquer;
pub mod strassen;

pub use classic::classic_multiply;
pub use divide_conquer::divide_conquer_multiply;
pub use strassen::strassen_multiply;

use num_traits::Num;
use std::ops::AddAssign;

use crate::matrix::DenseMatrix;

/// The multiplication strategy to use
///
/// All three compute the same product; they differ in structure and
/// asymptotic cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Triple-loop O(n³) multiplication, any square size
    Classic,
    /// Recursive 8-product block decomposition, power-of-two sizes
    DivideConquer,
    /// Strassen's 7-product recursion, power-of-two sizes >= 2
    Strassen,
}

impl Algorithm {
    /// Returns true if this algorithm accepts a matrix of side length `n`
    pub fn supports_size(&self, n: usize) -> bool {
        match self {
            Algorithm::Classic => n >= 1,
            Algorithm::DivideConquer => n.is_power_of_two(),
            Algorithm::Strassen => n >= 2 && n.is_power_of_two(),
        }
    }
}

/// Multiplies two square matrices with the selected strategy
///
/// Dispatch wrapper over the three entry points; the size preconditions
/// of the selected algorithm apply.
pub fn multiply<T>(a: &DenseMatrix<T>, b: &DenseMatrix<T>, algorithm: Algorithm) -> DenseMatrix<T>
where
    T: Copy + Num + AddAssign,
{
    match algorithm {
        Algorithm::Classic => classic_multiply(a, b),
        Algorithm::DivideConquer => divide_conquer_multiply(a, b),
        Algorithm::Strassen => strassen_multiply(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_size() {
        assert!(Algorithm::Classic.supports_size(3));
        assert!(Algorithm::DivideConquer.supports_size(1));
        assert!(!Algorithm::DivideConquer.supports_size(6));
        assert!(Algorithm::Strassen.supports_size(2));
        assert!(!Algorithm::Strassen.supports_size(1));
    }

    #[test]
    fn test_dispatch_agrees() {
        let a = DenseMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
        let b = DenseMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]);

        let expected = multiply(&a, &b, Algorithm::Classic);
        assert_eq!(multiply(&a, &b, Algorithm::DivideConquer), expected);
        assert_eq!(multiply(&a, &b, Algorithm::Strassen), expected);
    }
}
