//! Rank $k$ reconstruction from a full SVD.
//!
//! Given $A = U\Sigma V^T$ the rank $k$ approximation is
//! $A_k = U_{:, :k}\,\mathrm{diag}(\sigma_1, \dots, \sigma_k)\,V^T_{:k, :}$.
//! The $k\times k$ diagonal is used directly, no padding is needed.

use crate::storage::{SigmaLayout, StorageReport};
use crate::svd::{Decomposition, RankSelection};
use crate::types::{Result, Scalar};
use ndarray::{s, Array2, Axis, Zip};

pub struct RankKApproximation<A: Scalar> {
    /// The rank k
    pub rank: usize,
    /// First k columns of U (m x k)
    pub u: Array2<A>,
    /// Diagonal of the first k singular values (k x k)
    pub sigma: Array2<A>,
    /// First k rows of vt (k x n)
    pub vt: Array2<A>,
    /// The approximated matrix (m x n)
    pub matrix: Array2<A>,
    /// Element counts of the full and the truncated factors
    pub storage: StorageReport,
}

impl<A: Scalar> RankKApproximation<A> {
    pub fn nrows(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.matrix.ncols()
    }
}

/// Reconstruct the rank `rank` approximation, counting $\Sigma$ as a square block.
///
/// Fails with [`crate::LowRankError::InvalidRankError`] if `rank` is zero or larger
/// than `min(m, n)`. Nothing is computed in that case.
pub fn reconstruct<A: Scalar>(
    decomposition: &Decomposition<A>,
    rank: usize,
) -> Result<RankKApproximation<A>> {
    reconstruct_with_layout(decomposition, rank, SigmaLayout::default())
}

/// Like [`reconstruct`], with an explicit convention for the storage report.
pub fn reconstruct_with_layout<A: Scalar>(
    decomposition: &Decomposition<A>,
    rank: usize,
    layout: SigmaLayout,
) -> Result<RankKApproximation<A>> {
    decomposition.check_rank(rank)?;

    let (m, n) = (decomposition.nrows(), decomposition.ncols());
    log::debug!("Reconstructing {}x{} matrix with rank {}", m, n, rank);

    let u = decomposition.u.slice(s![.., 0..rank]).to_owned();
    let singvals = decomposition.s.slice(s![0..rank]).mapv(A::from_real);
    let vt = decomposition.vt.slice(s![0..rank, ..]).to_owned();

    // Scaling the rows of vt is the same as multiplying by the diagonal.
    let mut scaled_vt = vt.clone();
    Zip::from(scaled_vt.axis_iter_mut(Axis(0)))
        .and(singvals.view())
        .for_each(|mut row, &s_elem| row.map_inplace(|item| *item *= s_elem));
    let matrix = u.dot(&scaled_vt);

    Ok(RankKApproximation {
        rank,
        u,
        sigma: Array2::from_diag(&singvals),
        vt,
        matrix,
        storage: StorageReport::new(m, n, rank, layout),
    })
}

impl<A: Scalar> Decomposition<A> {
    /// Reconstruct the rank `rank` approximation. See [`reconstruct`].
    pub fn reconstruct(&self, rank: usize) -> Result<RankKApproximation<A>> {
        reconstruct(self, rank)
    }

    /// Reconstruct with the rank chosen by `selection`.
    pub fn approximate(
        &self,
        selection: RankSelection,
        layout: SigmaLayout,
    ) -> Result<RankKApproximation<A>> {
        let rank = self.rank_for(selection)?;
        reconstruct_with_layout(self, rank, layout)
    }
}
