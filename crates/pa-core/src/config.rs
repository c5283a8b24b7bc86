use std::path::PathBuf;

use crate::charset::Charset;

/// Default output width in terminal columns.
pub const DEFAULT_COLUMNS: u32 = 100;

/// Side of the square resize used by the color-matrix modes.
pub const MATRIX_SIZE: u32 = 500;

/// Resolved run configuration, built once from the CLI and read-only
/// afterwards.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Glyph ramp, darkest→brightest.
    pub charset: Charset,
    /// Inverser la luminance avant le bucketing (pour fond clair).
    pub invert: bool,
    /// Foreground style for terminal and SVG output, resolved to RGB.
    pub color: Option<(u8, u8, u8)>,
    /// Silhouette collapse target glyph.
    pub single_char: Option<char>,
    /// Output file path (.txt or .svg).
    pub store: Option<PathBuf>,
    /// Animated per-character rendering instead of the plain presenter.
    pub drawing: bool,
    /// Color-quantized image preview instead of ASCII text.
    pub black_yellow: bool,
    /// Drop every 4th row to compress vertical extent.
    pub fix_aspect_ratio: bool,
    /// Target width in columns.
    pub columns: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            charset: Charset::default(),
            invert: false,
            color: None,
            single_char: None,
            store: None,
            drawing: false,
            black_yellow: false,
            fix_aspect_ratio: false,
            columns: DEFAULT_COLUMNS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_preset_one() {
        let config = RenderConfig::default();
        assert_eq!(config.columns, 100);
        assert_eq!(config.charset.len(), 8);
        assert!(!config.invert);
        assert!(config.color.is_none());
    }
}
