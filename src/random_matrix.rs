//! Generation of synthetic grayscale images

use ndarray::Array2;
use num::traits::cast::cast;
use num::Float;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::input::PIXEL_MAX;

pub trait RandomMatrix
where
    Self: Float + 'static,
{
    /// Generate an image with independent uniformly distributed pixels in `[0, 255]`.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `rng`: The random number generator to use.
    fn random_image<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<Self> {
        random_uniform(dimension, PIXEL_MAX, rng)
    }

    /// Generate a random image of exact rank `rank`.
    ///
    /// The image is the product of two random non-negative factors of inner
    /// dimension `rank`, rescaled so that its brightest pixel is 255.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `rank`: The rank of the image. Must not exceed `min(rows, cols)`.
    /// * `rng`: The random number generator to use.
    fn random_low_rank_image<R: Rng>(
        dimension: (usize, usize),
        rank: usize,
        rng: &mut R,
    ) -> Array2<Self> {
        assert!(
            rank >= 1 && rank <= std::cmp::min(dimension.0, dimension.1),
            "`rank` must lie in [1, min(rows, cols)]"
        );

        let left = random_uniform::<Self, R>((dimension.0, rank), 1.0, rng);
        let right = random_uniform::<Self, R>((rank, dimension.1), 1.0, rng);
        let image = left.dot(&right);

        let max = image.iter().fold(Self::zero(), |acc, &item| acc.max(item));
        let scale = cast::<f64, Self>(PIXEL_MAX).unwrap() / max;
        image.mapv(|item| item * scale)
    }

    /// Generate a smooth diagonal gradient from black to white.
    fn gradient_image(dimension: (usize, usize)) -> Array2<Self> {
        let (m, n) = dimension;
        let steps = std::cmp::max(m + n, 3) - 2;
        Array2::from_shape_fn(dimension, |(i, j)| {
            cast::<f64, Self>(PIXEL_MAX * (i + j) as f64 / steps as f64).unwrap()
        })
    }
}

impl RandomMatrix for f64 {}

impl RandomMatrix for f32 {}

fn random_uniform<T: Float, R: Rng>(dimension: (usize, usize), high: f64, rng: &mut R) -> Array2<T> {
    let dist = Uniform::new_inclusive(0.0, high);
    Array2::from_shape_simple_fn(dimension, || cast::<f64, T>(dist.sample(rng)).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_svd::decompose;

    #[test]
    fn test_random_image_range() {
        let mut rng = rand::thread_rng();
        let mat = f64::random_image((20, 30), &mut rng);

        assert_eq!(mat.dim(), (20, 30));
        assert!(mat.iter().all(|&item| (0.0..=255.0).contains(&item)));
    }

    #[test]
    fn test_random_low_rank_image_rank() {
        let mut rng = rand::thread_rng();
        let mat = f64::random_low_rank_image((30, 20), 4, &mut rng);

        assert!((mat.iter().cloned().fold(0.0, f64::max) - 255.0).abs() < 1E-9);

        let svd = decompose(&mat).unwrap();
        assert!(svd.s[3] / svd.s[0] > 1E-8);
        assert!(svd.s[4] / svd.s[0] < 1E-10);
    }

    #[test]
    fn test_gradient_corners() {
        let mat = f32::gradient_image((5, 7));
        assert_eq!(mat[[0, 0]], 0.0);
        assert!((mat[[4, 6]] - 255.0).abs() < 1E-4);
    }
}
