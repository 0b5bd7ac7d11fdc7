//! Element counts of the full and the truncated factors.
//!
//! Storing the rank $k$ factors of an $m\times n$ image takes $mk + k^2 + kn$ values
//! against $m^2 + |\Sigma| + n^2$ for the full SVD. How $|\Sigma|$ is counted depends
//! on the [`SigmaLayout`].

use std::fmt;

/// Convention used to count the entries of the full $\Sigma$ matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SigmaLayout {
    /// The $p\times p$ diagonal block, $p = \min(m, n)$.
    Square,
    /// $\Sigma$ zero padded to $m\times n$.
    Padded,
}

impl Default for SigmaLayout {
    fn default() -> Self {
        SigmaLayout::Square
    }
}

/// Shape of one stored matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixSize {
    pub rows: usize,
    pub cols: usize,
}

impl MatrixSize {
    pub fn new(rows: usize, cols: usize) -> Self {
        MatrixSize { rows, cols }
    }

    /// Number of stored values.
    pub fn count(&self) -> usize {
        self.rows * self.cols
    }
}

impl fmt::Display for MatrixSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} x {} = {} values", self.rows, self.cols, self.count())
    }
}

/// Sizes of the three SVD factors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactorSizes {
    pub u: MatrixSize,
    pub sigma: MatrixSize,
    pub vt: MatrixSize,
}

impl FactorSizes {
    /// Sizes of the full SVD of an `nrows x ncols` matrix.
    pub fn full(nrows: usize, ncols: usize, layout: SigmaLayout) -> Self {
        let p = std::cmp::min(nrows, ncols);
        let sigma = match layout {
            SigmaLayout::Square => MatrixSize::new(p, p),
            SigmaLayout::Padded => MatrixSize::new(nrows, ncols),
        };

        FactorSizes {
            u: MatrixSize::new(nrows, nrows),
            sigma,
            vt: MatrixSize::new(ncols, ncols),
        }
    }

    /// Sizes of the rank `rank` factors of an `nrows x ncols` matrix.
    pub fn truncated(nrows: usize, ncols: usize, rank: usize) -> Self {
        FactorSizes {
            u: MatrixSize::new(nrows, rank),
            sigma: MatrixSize::new(rank, rank),
            vt: MatrixSize::new(rank, ncols),
        }
    }

    pub fn total(&self) -> usize {
        self.u.count() + self.sigma.count() + self.vt.count()
    }
}

impl fmt::Display for FactorSizes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "U = {}", self.u)?;
        writeln!(f, "Sigma = {}", self.sigma)?;
        write!(f, "Vt = {}", self.vt)
    }
}

/// Storage comparison between the full and the truncated decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageReport {
    pub rank: usize,
    pub layout: SigmaLayout,
    pub original: FactorSizes,
    pub truncated: FactorSizes,
}

impl StorageReport {
    pub fn new(nrows: usize, ncols: usize, rank: usize, layout: SigmaLayout) -> Self {
        StorageReport {
            rank,
            layout,
            original: FactorSizes::full(nrows, ncols, layout),
            truncated: FactorSizes::truncated(nrows, ncols, rank),
        }
    }

    /// Element counts `[u, sigma, vt]` of the full factors.
    pub fn original_counts(&self) -> [usize; 3] {
        [
            self.original.u.count(),
            self.original.sigma.count(),
            self.original.vt.count(),
        ]
    }

    /// Element counts `[u, sigma, vt]` of the truncated factors.
    pub fn truncated_counts(&self) -> [usize; 3] {
        [
            self.truncated.u.count(),
            self.truncated.sigma.count(),
            self.truncated.vt.count(),
        ]
    }

    /// Ratio of truncated to full storage.
    pub fn ratio(&self) -> f64 {
        self.truncated.total() as f64 / self.original.total() as f64
    }
}

impl fmt::Display for StorageReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Original matrices:")?;
        writeln!(f, "{}", self.original)?;
        writeln!(f, "Total = {} values", self.original.total())?;
        writeln!(f)?;
        writeln!(f, "Matrices for rank {}:", self.rank)?;
        writeln!(f, "{}", self.truncated)?;
        writeln!(f, "Total = {} values", self.truncated.total())?;
        write!(f, "Ratio = {:.2}%", 100.0 * self.ratio())
    }
}
