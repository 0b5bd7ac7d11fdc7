//! Per-user state of an interactive viewer.
//!
//! A [`Session`] decomposes its input once and reconstructs from the cached
//! decomposition whenever a new rank is requested. The presentation layer passes the
//! rank in explicitly; nothing is held in global state.

use crate::compute_svd::{decompose, ComputeSVD};
use crate::input::InputMatrix;
use crate::reconstruct::{reconstruct_with_layout, RankKApproximation};
use crate::storage::SigmaLayout;
use crate::svd::Decomposition;
use crate::types::{Result, Scalar};

/// Rank shown before the user picks one.
pub const DEFAULT_RANK: usize = 50;

pub struct Session<A: Scalar> {
    input: InputMatrix<A>,
    decomposition: Decomposition<A>,
    layout: SigmaLayout,
}

impl<A> Session<A>
where
    A: Scalar + ComputeSVD<A = A>,
{
    /// Decompose `input` and keep both for later reconstructions.
    pub fn new(input: InputMatrix<A>) -> Result<Self> {
        let decomposition = decompose(&input)?;
        log::debug!(
            "Session ready for {}x{} input, max rank {}",
            input.nrows(),
            input.ncols(),
            decomposition.max_rank()
        );

        Ok(Session {
            input,
            decomposition,
            layout: SigmaLayout::default(),
        })
    }
}

impl<A: Scalar> Session<A> {
    /// Use `layout` when counting the full $\Sigma$ in storage reports.
    pub fn with_layout(mut self, layout: SigmaLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn input(&self) -> &InputMatrix<A> {
        &self.input
    }

    pub fn decomposition(&self) -> &Decomposition<A> {
        &self.decomposition
    }

    pub fn layout(&self) -> SigmaLayout {
        self.layout
    }

    /// Upper end of the rank range, `min(m, n)`.
    pub fn max_rank(&self) -> usize {
        self.decomposition.max_rank()
    }

    /// [`DEFAULT_RANK`] clamped down to the admissible range.
    pub fn default_rank(&self) -> usize {
        self.clamp_rank(DEFAULT_RANK)
    }

    /// Clamp `rank` into `[1, max_rank]`.
    pub fn clamp_rank(&self, rank: usize) -> usize {
        let clamped = rank.max(1).min(self.max_rank());
        if clamped != rank {
            log::warn!(
                "Rank {} outside [1, {}], using {}",
                rank,
                self.max_rank(),
                clamped
            );
        }
        clamped
    }

    /// Reconstruct from the cached decomposition.
    ///
    /// The rank is not clamped: out of range values fail with
    /// [`crate::LowRankError::InvalidRankError`].
    pub fn approximate(&self, rank: usize) -> Result<RankKApproximation<A>> {
        reconstruct_with_layout(&self.decomposition, rank, self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::max_abs_diff;
    use crate::random_matrix::RandomMatrix;
    use crate::types::LowRankError;
    use ndarray::Array2;

    #[test]
    fn test_default_rank_is_clamped() {
        let input = InputMatrix::new(f64::gradient_image((20, 30))).unwrap();
        let session = Session::new(input).unwrap();

        assert_eq!(session.max_rank(), 20);
        assert_eq!(session.default_rank(), 20);
        assert_eq!(session.clamp_rank(0), 1);
        assert_eq!(session.clamp_rank(7), 7);
        assert_eq!(session.clamp_rank(100), 20);
    }

    #[test]
    fn test_default_rank_on_large_input() {
        let mut rng = rand::thread_rng();
        let input = InputMatrix::new(f64::random_image((64, 60), &mut rng)).unwrap();
        let session = Session::new(input).unwrap();

        assert_eq!(session.default_rank(), DEFAULT_RANK);
    }

    #[test]
    fn test_repeated_approximations() {
        let mut rng = rand::thread_rng();
        let input = InputMatrix::new(f64::random_image((25, 15), &mut rng)).unwrap();
        let session = Session::new(input).unwrap().with_layout(SigmaLayout::Padded);

        let coarse = session.approximate(2).unwrap();
        let full = session.approximate(15).unwrap();

        assert_eq!(coarse.rank, 2);
        assert_eq!(coarse.storage.layout, SigmaLayout::Padded);
        assert_eq!(coarse.storage.original.sigma.count(), 25 * 15);
        assert!(max_abs_diff(full.matrix.view(), session.input().view()) < 1E-8);

        assert!(matches!(
            session.approximate(16),
            Err(LowRankError::InvalidRankError { rank: 16, max_rank: 15 })
        ));
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let mut data = Array2::<f64>::zeros((4, 4));
        data[[3, 3]] = f64::NAN;
        assert!(InputMatrix::new(data).is_err());
    }
}
