//! Utility functions and helpers

pub mod formats;

pub use formats::{from_ndarray, to_ndarray};
