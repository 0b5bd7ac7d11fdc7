//! The pixel matrix handed to the decomposer.
//!
//! An [`InputMatrix`] is an $M\times N$ array of grayscale intensities in row-major
//! order. It is validated once on construction and cannot be modified afterwards.
//! Colour sources are collapsed to a single channel with [`collapse_channels`]
//! before they become an input matrix.

use crate::types::{LowRankError, Result};
use ndarray::{s, Array2, ArrayView2, ArrayView3, Axis};
use num::{Float, FromPrimitive};

/// Largest intensity of an 8 bit grayscale pixel.
pub const PIXEL_MAX: f64 = 255.0;

#[derive(Clone, Debug)]
pub struct InputMatrix<A> {
    data: Array2<A>,
}

impl<A: Float> InputMatrix<A> {
    /// Validate `data` and wrap it.
    ///
    /// Fails with [`LowRankError::DecompositionError`] if a dimension is zero or
    /// an entry is not finite. Intensities outside `[0, 255]` are accepted but
    /// reported through the logger.
    pub fn new(data: Array2<A>) -> Result<Self> {
        check_matrix(data.view())?;

        let max: A = num::NumCast::from(PIXEL_MAX).unwrap_or_else(A::max_value);
        let outside = data
            .iter()
            .filter(|&&item| item < A::zero() || item > max)
            .count();
        if outside > 0 {
            log::warn!(
                "{} of {} pixel values lie outside [0, 255]",
                outside,
                data.len()
            );
        }

        Ok(InputMatrix { data })
    }

    /// Collapse an `H x W x C` array to one channel and wrap the result.
    pub fn from_channels(pixels: ArrayView3<A>) -> Result<Self>
    where
        A: FromPrimitive,
    {
        Self::new(collapse_channels(pixels)?)
    }
}

impl<A> InputMatrix<A> {
    pub fn view(&self) -> ArrayView2<A> {
        self.data.view()
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Tuple `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn into_inner(self) -> Array2<A> {
        self.data
    }
}

/// Check that `mat` is a non-empty matrix of finite values.
pub(crate) fn check_matrix<A: Float>(mat: ArrayView2<A>) -> Result<()> {
    let (m, n) = mat.dim();
    if m == 0 || n == 0 {
        return Err(LowRankError::DecompositionError(format!(
            "matrix has a zero dimension ({}x{})",
            m, n
        )));
    }

    if let Some(((row, col), _)) = mat.indexed_iter().find(|(_, item)| !item.is_finite()) {
        return Err(LowRankError::DecompositionError(format!(
            "non-finite value at ({}, {})",
            row, col
        )));
    }

    Ok(())
}

/// Collapse an `H x W x C` pixel array to an `H x W` grayscale matrix.
///
/// Colour channels are averaged. A trailing alpha channel (C = 2 or C = 4) is
/// dropped before averaging.
pub fn collapse_channels<A>(pixels: ArrayView3<A>) -> Result<Array2<A>>
where
    A: Float + FromPrimitive,
{
    let colour = match pixels.len_of(Axis(2)) {
        1 | 3 => pixels,
        2 | 4 => {
            let last = pixels.len_of(Axis(2)) - 1;
            pixels.slice_move(s![.., .., 0..last])
        }
        c => {
            return Err(LowRankError::ShapeError(format!(
                "cannot collapse {} channels to grayscale",
                c
            )))
        }
    };

    colour
        .mean_axis(Axis(2))
        .ok_or_else(|| LowRankError::ShapeError("pixel array has no channels".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};

    #[test]
    fn test_collapse_rgb_averages_channels() {
        let mut pixels = Array3::<f64>::zeros((2, 3, 3));
        pixels.slice_mut(s![.., .., 0]).fill(30.0);
        pixels.slice_mut(s![.., .., 1]).fill(60.0);
        pixels.slice_mut(s![.., .., 2]).fill(90.0);

        let gray = collapse_channels(pixels.view()).unwrap();

        assert_eq!(gray.dim(), (2, 3));
        assert!(gray.iter().all(|&item| (item - 60.0).abs() < 1E-12));
    }

    #[test]
    fn test_collapse_ignores_alpha() {
        let mut pixels = Array3::<f64>::zeros((1, 2, 4));
        pixels.slice_mut(s![.., .., 0..3]).fill(120.0);
        pixels.slice_mut(s![.., .., 3]).fill(255.0);

        let gray = collapse_channels(pixels.view()).unwrap();

        assert_eq!(gray, array![[120.0, 120.0]]);
    }

    #[test]
    fn test_collapse_rejects_unknown_layout() {
        let pixels = Array3::<f32>::zeros((2, 2, 5));
        assert!(matches!(
            collapse_channels(pixels.view()),
            Err(LowRankError::ShapeError(_))
        ));
    }

    #[test]
    fn test_input_rejects_nan_and_empty() {
        let mut data = Array2::<f64>::from_elem((3, 3), 10.0);
        data[[1, 2]] = f64::NAN;
        assert!(matches!(
            InputMatrix::new(data),
            Err(LowRankError::DecompositionError(_))
        ));

        assert!(matches!(
            InputMatrix::new(Array2::<f64>::zeros((0, 4))),
            Err(LowRankError::DecompositionError(_))
        ));

        let mut data = Array2::<f32>::zeros((2, 2));
        data[[0, 0]] = f32::INFINITY;
        assert!(InputMatrix::new(data).is_err());
    }

    #[test]
    fn test_input_accepts_out_of_range_values() {
        let input = InputMatrix::new(array![[-1.0, 300.0], [0.0, 255.0]]).unwrap();
        assert_eq!(input.shape(), (2, 2));
    }
}
