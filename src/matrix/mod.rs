// Matrix data structures and operations

pub mod arith;
pub mod block;
pub mod dense;

pub use arith::{add, sub};
pub use block::{extract_quadrant, split_quadrants, write_quadrant};
pub use dense::DenseMatrix;
