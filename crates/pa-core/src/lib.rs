/// Shared types and configuration for picascii.
///
/// This crate contains the types passed between pipeline stages: the
/// glyph ramp, the rendered art grid, the terminal palette, and the
/// resolved run configuration. No image or terminal dependencies here.
pub mod art;
pub mod charset;
pub mod config;
pub mod error;
pub mod palette;

pub use art::AsciiArt;
pub use charset::Charset;
pub use config::RenderConfig;
pub use error::CoreError;
pub use palette::{ColorMatrix, PaletteColor};
