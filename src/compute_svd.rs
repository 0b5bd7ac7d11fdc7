//! A simple trait to wrap the full SVD computation.
//!
//! This is the decomposer: it validates the input matrix and hands it to LAPACK's
//! divide and conquer SVD, keeping the complete factors $U\in\mathbb{R}^{m\times m}$
//! and $V^T\in\mathbb{R}^{n\times n}$.

use crate::input::check_matrix;
use crate::svd::Decomposition;
use crate::traits::ArrayProvider;
use crate::types::{LowRankError, Result, Scalar};
use ndarray::ArrayView2;
use ndarray_linalg::{JobSvd, SVDDCInto};

pub trait ComputeSVD {
    type A: Scalar;

    fn compute_svd(arr: ArrayView2<Self::A>) -> Result<Decomposition<Self::A>>;
}

macro_rules! compute_svd_impl {
    ($scalar:ty) => {
        impl ComputeSVD for $scalar {
            type A = $scalar;
            fn compute_svd(arr: ArrayView2<Self::A>) -> Result<Decomposition<Self::A>> {
                check_matrix(arr)?;

                let (m, n) = arr.dim();
                log::debug!("Computing full SVD of {}x{} matrix", m, n);

                let (u, s, vt) = match arr.to_owned().svddc_into(JobSvd::All) {
                    Ok((Some(u), s, Some(vt))) => (u, s, vt),
                    Ok(_) => {
                        return Err(LowRankError::DecompositionError(
                            "LAPACK did not return singular vectors".to_string(),
                        ))
                    }
                    Err(err) => return Err(LowRankError::DecompositionError(err.to_string())),
                };

                debug_assert!(s.iter().all(|&item| item >= 0.0));
                debug_assert!(s.iter().zip(s.iter().skip(1)).all(|(a, b)| a >= b));

                Ok(Decomposition { u, s, vt })
            }
        }
    };
}

compute_svd_impl!(f32);
compute_svd_impl!(f64);

/// Compute the full SVD of `matrix`.
///
/// Fails with [`LowRankError::DecompositionError`] if `matrix` has a zero
/// dimension or contains NaN or infinite values.
pub fn decompose<A, M>(matrix: M) -> Result<Decomposition<A>>
where
    A: Scalar + ComputeSVD<A = A>,
    M: ArrayProvider<A>,
{
    A::compute_svd(matrix.array_view())
}
