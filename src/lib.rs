//! Rank $k$ approximation of grayscale images with the singular value decomposition.
//!
//! An $m\times n$ grayscale image is a matrix of intensities in $[0, 255]$. Its full
//! SVD $A = U\Sigma V^T$ is computed once with [`decompose`]; [`reconstruct`] then keeps
//! the $k$ largest singular triplets and multiplies them back together. The result is
//! the best rank $k$ approximation of the image together with a count of the values
//! needed to store the truncated factors.
//!
//! ```no_run
//! use rusty_lowrank::prelude::*;
//!
//! let input = load_grayscale("photo.jpg").unwrap();
//! let session = Session::new(input).unwrap();
//! let approx = session.approximate(session.default_rank()).unwrap();
//! println!("{}", approx.storage);
//! save_grayscale("photo_rank_k.png", approx.matrix.view()).unwrap();
//! ```

pub mod compute_svd;
pub mod helpers;
pub mod image_io;
pub mod input;
pub mod prelude;
pub mod random_matrix;
pub mod reconstruct;
pub mod session;
pub mod storage;
pub mod svd;
pub mod traits;
pub mod types;

pub use compute_svd::{decompose, ComputeSVD};
pub use input::InputMatrix;
pub use reconstruct::{reconstruct, reconstruct_with_layout, RankKApproximation};
pub use svd::{Decomposition, RankSelection};
pub use types::{LowRankError, Result};
