//! Loading images as grayscale matrices and writing reconstructions back out.

use crate::input::{InputMatrix, PIXEL_MAX};
use crate::types::{LowRankError, Result};
use image::{DynamicImage, GrayImage, Luma};
use ndarray::{Array2, Array3, ArrayView2};
use num::Float;
use std::path::Path;

/// Decode the image at `path` into a grayscale input matrix.
///
/// Colour images are collapsed by averaging their red, green and blue channels.
/// Alpha is ignored.
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<InputMatrix<f64>> {
    let img = image::open(path.as_ref())?;
    log::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.as_ref().display(),
        img.width(),
        img.height(),
        img.color()
    );
    from_dynamic_image(&img)
}

/// Convert a decoded image into a grayscale input matrix.
pub fn from_dynamic_image(img: &DynamicImage) -> Result<InputMatrix<f64>> {
    let (width, height) = (img.width() as usize, img.height() as usize);

    if !img.color().has_color() {
        let raw = img.to_luma8().into_raw();
        let data = Array2::from_shape_vec((height, width), raw.into_iter().map(f64::from).collect())
            .map_err(|err| LowRankError::ShapeError(err.to_string()))?;
        return InputMatrix::new(data);
    }

    let raw = img.to_rgb8().into_raw();
    let pixels = Array3::from_shape_vec((height, width, 3), raw.into_iter().map(f64::from).collect())
        .map_err(|err| LowRankError::ShapeError(err.to_string()))?;
    InputMatrix::from_channels(pixels.view())
}

/// Render `mat` as an 8 bit grayscale image, clamping values to `[0, 255]`.
pub fn to_gray_image<A: Float>(mat: ArrayView2<A>) -> GrayImage {
    let (m, n) = mat.dim();
    GrayImage::from_fn(n as u32, m as u32, |x, y| {
        let value = mat[[y as usize, x as usize]].to_f64().unwrap_or(0.0);
        Luma([value.max(0.0).min(PIXEL_MAX).round() as u8])
    })
}

/// Write `mat` to `path`. The format is taken from the file extension.
pub fn save_grayscale<A: Float, P: AsRef<Path>>(path: P, mat: ArrayView2<A>) -> Result<()> {
    to_gray_image(mat).save(path.as_ref())?;
    log::debug!("Wrote {}", path.as_ref().display());
    Ok(())
}
