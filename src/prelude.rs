//! Collect all traits and other exports here.

pub use crate::compute_svd::{decompose, ComputeSVD};
pub use crate::helpers::*;
pub use crate::image_io::{load_grayscale, save_grayscale, to_gray_image};
pub use crate::input::{collapse_channels, InputMatrix, PIXEL_MAX};
pub use crate::random_matrix::RandomMatrix;
pub use crate::reconstruct::{reconstruct, reconstruct_with_layout, RankKApproximation};
pub use crate::session::{Session, DEFAULT_RANK};
pub use crate::storage::{FactorSizes, MatrixSize, SigmaLayout, StorageReport};
pub use crate::svd::{Decomposition, RankSelection};
pub use crate::traits::ArrayProvider;
pub use crate::types::{LowRankError, Result};
