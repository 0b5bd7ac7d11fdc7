//! Error type and scalar re-exports shared by the whole crate.

use thiserror::Error;

pub use ndarray_linalg::Scalar;

#[derive(Error, Debug)]
pub enum LowRankError {
    /// The input is not a finite, non-empty 2D matrix, or LAPACK rejected it.
    #[error("Decomposition failed: {0}")]
    DecompositionError(String),
    /// The requested rank lies outside `[1, max_rank]`.
    #[error("Invalid rank {rank}: must lie in [1, {max_rank}]")]
    InvalidRankError { rank: usize, max_rank: usize },
    #[error("Invalid tolerance {0}: require 0 <= tol < 1")]
    InvalidToleranceError(f64),
    #[error("Shape mismatch: {0}")]
    ShapeError(String),
    #[error("Image Error")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, LowRankError>;
