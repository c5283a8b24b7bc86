use std::path::PathBuf;

use clap::Parser;
use pa_core::charset::Charset;
use pa_core::config::RenderConfig;
use pa_core::error::CoreError;
use pa_core::palette::parse_style;

/// picascii — Terminal ASCII art generator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image file path. Prompted interactively when absent, read from
    /// stdin when piped.
    pub image: Option<PathBuf>,

    /// Built-in charset preset: 1 (8 glyphs) or 2 (11 glyphs).
    #[arg(long, group = "charset_source")]
    pub preset: Option<u8>,

    /// Custom glyph ramp, darkest to brightest.
    #[arg(long, group = "charset_source", num_args = 1.., value_name = "CHAR")]
    pub charset: Option<Vec<char>>,

    /// Render a color-quantized image preview instead of ASCII text.
    #[arg(long, group = "charset_source", default_value_t = false)]
    pub black_yellow: bool,

    /// Invert luminance before mapping (for light backgrounds).
    #[arg(long, default_value_t = false)]
    pub inverse: bool,

    /// Foreground color: a name (red, yellow, ...) or #rrggbb hex.
    #[arg(long)]
    pub color: Option<String>,

    /// Persist the output to a .txt or .svg file.
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Collapse the art to a silhouette drawn with this character.
    #[arg(long = "single-ascii_char", value_name = "CHAR")]
    pub single_ascii_char: Option<char>,

    /// Animate the rendering character by character.
    #[arg(long, default_value_t = false)]
    pub drawing: bool,

    /// Drop every 4th row to compress vertical extent.
    #[arg(long, default_value_t = false)]
    pub fix_aspect_ratio: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Resolve the CLI surface into a read-only [`RenderConfig`].
    ///
    /// # Errors
    /// [`CoreError::InvalidPreset`] for a preset id outside 1..=2,
    /// [`CoreError::EmptyCharset`] for an empty custom ramp.
    pub fn resolve_config(&self) -> Result<RenderConfig, CoreError> {
        let charset = if let Some(id) = self.preset {
            Charset::preset(id)?
        } else if let Some(glyphs) = &self.charset {
            Charset::custom(glyphs.clone())?
        } else {
            Charset::default()
        };

        let color = self.color.as_deref().and_then(|spec| {
            let resolved = parse_style(spec);
            if resolved.is_none() {
                log::warn!("unknown color {spec:?}, printing without style");
            }
            resolved
        });

        Ok(RenderConfig {
            charset,
            invert: self.inverse,
            color,
            single_char: self.single_ascii_char,
            store: self.store.clone(),
            drawing: self.drawing,
            black_yellow: self.black_yellow,
            fix_aspect_ratio: self.fix_aspect_ratio,
            ..RenderConfig::default()
        })
    }
}
