//! Distance matrix.
//!
//! Provides a dense Manhattan distance matrix computed once per instance.

mod matrix;

pub use matrix::DistanceMatrix;
