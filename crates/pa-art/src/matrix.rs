use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage};
use pa_core::palette::{ColorMatrix, PaletteColor};

/// Build a color matrix from a bitmap.
///
/// The original (pre-grayscale) image is resized to `size`×`size`
/// independently of the glyph pipeline, grayscaled, and each pixel's
/// luminance is banded into the fixed 6-entry palette.
#[must_use]
pub fn color_matrix(image: &DynamicImage, size: u32) -> ColorMatrix {
    let gray = image.resize_exact(size, size, FilterType::CatmullRom).to_luma8();
    let cells = gray
        .pixels()
        .map(|p| PaletteColor::from_luminance(p.0[0]))
        .collect();
    ColorMatrix::new(cells, size, size)
}

/// Reconstruct a full-color bitmap from a matrix, one pixel per cell.
///
/// This is the black-yellow preview: a color-quantization of the source,
/// bypassing ASCII rendering entirely.
#[must_use]
pub fn quantized_image(matrix: &ColorMatrix) -> RgbImage {
    RgbImage::from_fn(matrix.width(), matrix.height(), |x, y| {
        let (r, g, b) = matrix.get(x, y).rgb();
        Rgb([r, g, b])
    })
}
