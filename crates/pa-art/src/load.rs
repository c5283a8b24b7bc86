use std::path::{Path, PathBuf};

use image::DynamicImage;
use thiserror::Error;

/// Errors from bitmap loading, specific enough for the interactive
/// retry prompt to pick the right diagnostic.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Path does not exist on disk.
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// Path points at a directory, not an image file.
    #[error("path is a directory: {0}")]
    IsADirectory(PathBuf),

    /// Bytes could not be decoded as a supported image format.
    #[error("not a valid image: {0}")]
    Undecodable(#[from] image::ImageError),
}

/// Load and decode an image from disk.
///
/// Existence and directory checks run first so the caller can
/// distinguish a missing path from a non-image file.
///
/// # Errors
/// [`LoadError::NotFound`], [`LoadError::IsADirectory`], or
/// [`LoadError::Undecodable`].
pub fn load_from_path(path: &Path) -> Result<DynamicImage, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_owned()));
    }
    if path.is_dir() {
        return Err(LoadError::IsADirectory(path.to_owned()));
    }
    let img = image::open(path)?;
    log::debug!(
        "loaded {} ({}×{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Decode an image from raw bytes (piped stdin).
///
/// # Errors
/// [`LoadError::Undecodable`] when the bytes are not a supported format.
pub fn load_from_bytes(bytes: &[u8]) -> Result<DynamicImage, LoadError> {
    Ok(image::load_from_memory(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_not_found() {
        let err = load_from_path(Path::new("/no/such/picascii-input.png"));
        assert!(matches!(err, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(dir.path());
        assert!(matches!(err, Err(LoadError::IsADirectory(_))));
    }

    #[test]
    fn garbage_bytes_are_undecodable() {
        let err = load_from_bytes(b"definitely not an image");
        assert!(matches!(err, Err(LoadError::Undecodable(_))));
    }

    #[test]
    fn garbage_file_is_undecodable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.png");
        std::fs::write(&path, b"not a png").unwrap();
        let err = load_from_path(&path);
        assert!(matches!(err, Err(LoadError::Undecodable(_))));
    }
}
