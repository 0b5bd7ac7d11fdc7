//! Error measures between a matrix and its approximation.

use crate::input::PIXEL_MAX;
use crate::types::Scalar;
use ndarray::{ArrayBase, ArrayView2, Data, Ix2, Zip};
use num::traits::cast::cast;
use num::{Float, Zero};

pub trait RelDiff {
    type A: Scalar;

    /// Return the relative Frobenius norm difference of `self` and `other`.
    fn rel_diff(&self, other: ArrayView2<Self::A>) -> <Self::A as Scalar>::Real;
}

impl<A, S> RelDiff for ArrayBase<S, Ix2>
where
    A: Scalar,
    S: Data<Elem = A>,
{
    type A = A;
    fn rel_diff(&self, other: ArrayView2<A>) -> A::Real {
        let error = frobenius_error(self.view(), other);
        let norm = Float::sqrt(
            other
                .iter()
                .fold(Zero::zero(), |acc: A::Real, &item| acc + item.square()),
        );

        // Against a zero matrix the absolute error is returned.
        if norm.is_zero() {
            return error;
        }
        error / norm
    }
}

/// Frobenius norm of `first - second`.
///
/// Panics if the shapes differ.
pub fn frobenius_error<A: Scalar>(first: ArrayView2<A>, second: ArrayView2<A>) -> A::Real {
    let mut acc: A::Real = Zero::zero();
    Zip::from(first).and(second).for_each(|&a, &b| {
        acc += (a - b).square();
    });
    Float::sqrt(acc)
}

/// Largest absolute entry of `first - second`.
pub fn max_abs_diff<A: Scalar>(first: ArrayView2<A>, second: ArrayView2<A>) -> A::Real {
    let mut max: A::Real = Zero::zero();
    Zip::from(first).and(second).for_each(|&a, &b| {
        max = Float::max(max, (a - b).abs());
    });
    max
}

/// Peak signal to noise ratio in dB of an 8 bit approximation.
///
/// Returns `None` if the two matrices coincide.
pub fn psnr<A: Scalar>(approx: ArrayView2<A>, original: ArrayView2<A>) -> Option<f64> {
    let len = original.len();
    if len == 0 {
        return None;
    }

    let sq_err = cast::<A::Real, f64>(frobenius_error(approx, original))?.powi(2);
    let mse = sq_err / len as f64;
    if mse == 0.0 {
        return None;
    }

    Some(10.0 * (PIXEL_MAX * PIXEL_MAX / mse).log10())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_error_measures() {
        let a: Array2<f64> = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[1.0, 2.0], [3.0, 6.0]];

        assert!((frobenius_error(a.view(), b.view()) - 2.0).abs() < 1E-12);
        assert!((max_abs_diff(a.view(), b.view()) - 2.0).abs() < 1E-12);

        let expected = 2.0 / (1.0f64 + 4.0 + 9.0 + 36.0).sqrt();
        assert!((a.rel_diff(b.view()) - expected).abs() < 1E-12);
    }

    #[test]
    fn test_psnr() {
        let a = array![[0.0, 0.0], [0.0, 0.0]];
        let b = array![[255.0, 255.0], [255.0, 255.0]];
        assert!(psnr(a.view(), a.view()).is_none());
        assert!(psnr(a.view(), b.view()).unwrap().abs() < 1E-12);

        let c = array![[25.5, 25.5], [25.5, 25.5]];
        assert!((psnr(c.view(), a.view()).unwrap() - 20.0).abs() < 1E-9);
    }
}
