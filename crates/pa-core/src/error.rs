use thiserror::Error;

/// Errors originating from configuration resolution.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Preset id outside the built-in range.
    #[error("invalid preset {0}: preset character sets are either 1 or 2")]
    InvalidPreset(u8),

    /// A custom charset must contain at least one glyph.
    #[error("a charset needs at least one character")]
    EmptyCharset,

    /// Output path extension is neither .txt nor .svg.
    #[error("unsupported output extension {extension:?}: expected .txt or .svg")]
    UnsupportedExtension {
        /// The offending extension (may be empty).
        extension: String,
    },
}
