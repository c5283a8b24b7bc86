use std::path::PathBuf;

use anyhow::{Context, Result};
use pa_art::DynamicImage;
use pa_art::matrix;
use pa_core::config::MATRIX_SIZE;

use crate::store::open_external;

/// Black-yellow mode: write the color-quantized preview to a temp PNG
/// and open it with the platform viewer. Bypasses ASCII rendering.
///
/// # Errors
/// Fails when the preview PNG cannot be written.
pub fn show_black_yellow(image: &DynamicImage) -> Result<PathBuf> {
    let matrix = matrix::color_matrix(image, MATRIX_SIZE);
    let preview = matrix::quantized_image(&matrix);

    let path = std::env::temp_dir().join("picascii-preview.png");
    preview
        .save(&path)
        .with_context(|| format!("writing preview to {}", path.display()))?;
    log::info!("quantized preview written to {}", path.display());

    open_external(&path.display().to_string());
    Ok(path)
}
