//! The SVD container and the queries it answers.
//!
//! The full SVD of $A\in\mathbb{R}^{m\times n}$ is $A = U\Sigma V^T$ with
//! $U\in\mathbb{R}^{m\times m}$ and $V^T\in\mathbb{R}^{n\times n}$ orthogonal and
//! $\Sigma\in\mathbb{R}^{m\times n}$ zero except for the singular values
//! $\sigma_1\geq\sigma_2\geq\dots\geq\sigma_p\geq 0$, $p=\min(m, n)$, on its diagonal.
//!
//! By the Eckart-Young theorem the best rank $k$ approximation $A_k$ in the Frobenius
//! norm keeps the first $k$ singular triplets, and
//! $\|A - A_k\|_F = \sqrt{\sum_{i>k}\sigma_i^2}$.

use crate::storage::SigmaLayout;
use crate::types::{LowRankError, Result, Scalar};
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis, Zip};
use num::traits::cast::cast;
use num::{Float, One, Zero};

pub struct Decomposition<A: Scalar> {
    /// The U matrix (m x m)
    pub u: Array2<A>,
    /// The array of singular values in descending order
    pub s: Array1<A::Real>,
    /// The vt matrix (n x n)
    pub vt: Array2<A>,
}

/// How the rank of an approximation is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RankSelection {
    /// Keep exactly this many singular values.
    Rank(usize),
    /// Keep the singular values whose ratio to the largest one is at least `tol`.
    Tolerance(f64),
}

impl<A: Scalar> Decomposition<A> {
    /// Number of rows of the decomposed matrix
    pub fn nrows(&self) -> usize {
        self.u.nrows()
    }

    /// Number of columns of the decomposed matrix
    pub fn ncols(&self) -> usize {
        self.vt.ncols()
    }

    /// Largest admissible rank, `min(m, n)`.
    pub fn max_rank(&self) -> usize {
        self.s.len()
    }

    pub fn singular_values(&self) -> ArrayView1<A::Real> {
        self.s.view()
    }

    pub fn u(&self) -> ArrayView2<A> {
        self.u.view()
    }

    pub fn vt(&self) -> ArrayView2<A> {
        self.vt.view()
    }

    /// Fail with [`LowRankError::InvalidRankError`] unless `1 <= rank <= max_rank`.
    pub fn check_rank(&self, rank: usize) -> Result<()> {
        if rank == 0 || rank > self.max_rank() {
            return Err(LowRankError::InvalidRankError {
                rank,
                max_rank: self.max_rank(),
            });
        }
        Ok(())
    }

    /// The full $\Sigma$ matrix in the given layout.
    ///
    /// `SigmaLayout::Square` returns the $p\times p$ diagonal, `SigmaLayout::Padded`
    /// the zero padded $m\times n$ matrix.
    pub fn sigma(&self, layout: SigmaLayout) -> Array2<A> {
        let p = self.max_rank();
        let (rows, cols) = match layout {
            SigmaLayout::Square => (p, p),
            SigmaLayout::Padded => (self.nrows(), self.ncols()),
        };

        let mut sigma = Array2::<A>::zeros((rows, cols));
        sigma
            .slice_mut(s![0..p, 0..p])
            .diag_mut()
            .assign(&self.s.mapv(A::from_real));
        sigma
    }

    /// Multiply the factors back together.
    pub fn to_mat(&self) -> Array2<A> {
        let p = self.max_rank();
        let mut scaled_vt = self.vt.slice(s![0..p, ..]).to_owned();

        Zip::from(scaled_vt.axis_iter_mut(Axis(0)))
            .and(self.s.view())
            .for_each(|mut row, &s_elem| row.map_inplace(|item| *item *= A::from_real(s_elem)));

        self.u.slice(s![.., 0..p]).dot(&scaled_vt)
    }

    /// Frobenius norm of the error of the best rank `rank` approximation.
    pub fn truncation_error(&self, rank: usize) -> Result<A::Real> {
        self.check_rank(rank)?;
        Ok(Float::sqrt(self.tail_energy(rank)))
    }

    /// Fraction of the squared Frobenius norm kept by the first `rank` singular values.
    pub fn energy_retained(&self, rank: usize) -> Result<A::Real> {
        self.check_rank(rank)?;

        let total = self.tail_energy(0);
        if total.is_zero() {
            return Ok(One::one());
        }
        Ok((total - self.tail_energy(rank)) / total)
    }

    /// Translate a [`RankSelection`] into a concrete rank.
    pub fn rank_for(&self, selection: RankSelection) -> Result<usize> {
        match selection {
            RankSelection::Rank(rank) => {
                self.check_rank(rank)?;
                Ok(rank)
            }
            RankSelection::Tolerance(tol) => self.rank_for_tolerance(tol),
        }
    }

    fn rank_for_tolerance(&self, tol: f64) -> Result<usize> {
        if !((0.0..1.0).contains(&tol)) {
            return Err(LowRankError::InvalidToleranceError(tol));
        }

        let tol = cast::<f64, A::Real>(tol).ok_or(LowRankError::InvalidToleranceError(tol))?;
        let first = match self.s.get(0) {
            Some(&first) if !first.is_zero() => first,
            _ => return Ok(self.max_rank()),
        };

        let pos = self.s.iter().position(|&item| item / first < tol);
        Ok(pos.unwrap_or_else(|| self.max_rank()))
    }

    fn tail_energy(&self, rank: usize) -> A::Real {
        self.s
            .iter()
            .skip(rank)
            .fold(Zero::zero(), |acc: A::Real, &item| acc + item * item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_svd::decompose;
    use crate::random_matrix::RandomMatrix;
    use ndarray::{array, Array2};
    use ndarray_linalg::OperationNorm;

    #[test]
    fn test_sigma_layouts() {
        let mat: Array2<f64> = array![[3.0, 0.0, 0.0], [0.0, 2.0, 0.0]];
        let svd = decompose(&mat).unwrap();

        let square = svd.sigma(SigmaLayout::Square);
        assert_eq!(square.dim(), (2, 2));
        assert!((square[[0, 0]] - 3.0).abs() < 1E-12);
        assert!((square[[1, 1]] - 2.0).abs() < 1E-12);
        assert_eq!(square[[0, 1]], 0.0);

        let padded = svd.sigma(SigmaLayout::Padded);
        assert_eq!(padded.dim(), (2, 3));
        assert!(padded.column(2).iter().all(|&item| item == 0.0));

        let full = svd.u.dot(&padded).dot(&svd.vt);
        assert!((full - &mat).opnorm_fro().unwrap() < 1E-12);
    }

    #[test]
    fn test_truncation_error_matches_eckart_young() {
        let mut rng = rand::thread_rng();
        let mat = f64::random_image((30, 20), &mut rng);
        let svd = decompose(&mat).unwrap();

        for rank in [1, 5, 19] {
            let approx = svd.reconstruct(rank).unwrap();
            let measured = (&approx.matrix - &mat).opnorm_fro().unwrap();
            let predicted = svd.truncation_error(rank).unwrap();
            assert!((measured - predicted).abs() < 1E-8 * mat.opnorm_fro().unwrap());
        }

        assert!(svd.truncation_error(20).unwrap() < 1E-8);
        assert!((svd.energy_retained(20).unwrap() - 1.0).abs() < 1E-12);
        assert!(svd.energy_retained(1).unwrap() <= svd.energy_retained(2).unwrap());
    }

    #[test]
    fn test_rank_for_tolerance() {
        let mat = Array2::from_diag(&array![100.0, 10.0, 1.0, 0.1]);
        let svd = decompose(&mat).unwrap();

        assert_eq!(svd.rank_for(RankSelection::Tolerance(0.5)).unwrap(), 1);
        assert_eq!(svd.rank_for(RankSelection::Tolerance(0.05)).unwrap(), 2);
        assert_eq!(svd.rank_for(RankSelection::Tolerance(0.0)).unwrap(), 4);
        assert_eq!(svd.rank_for(RankSelection::Rank(3)).unwrap(), 3);

        assert!(matches!(
            svd.rank_for(RankSelection::Tolerance(1.0)),
            Err(LowRankError::InvalidToleranceError(_))
        ));
        assert!(matches!(
            svd.rank_for(RankSelection::Rank(5)),
            Err(LowRankError::InvalidRankError { rank: 5, max_rank: 4 })
        ));
    }

    #[test]
    fn test_all_zero_matrix() {
        let mat = Array2::<f64>::zeros((3, 5));
        let svd = decompose(&mat).unwrap();

        assert_eq!(svd.rank_for(RankSelection::Tolerance(0.1)).unwrap(), 3);
        assert_eq!(svd.energy_retained(1).unwrap(), 1.0);
    }
}
