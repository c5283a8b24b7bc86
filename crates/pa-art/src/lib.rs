/// Image-to-ASCII transformation pipeline for picascii.
///
/// Load a bitmap, map its pixels to a glyph ramp, and optionally derive
/// silhouette or color-matrix artifacts. Each stage consumes its input
/// and hands a new artifact to the next; nothing is shared.
pub mod load;
pub mod mapper;
pub mod matrix;
pub mod silhouette;

pub use load::{LoadError, load_from_bytes, load_from_path};
pub use mapper::render_ascii;

/// Re-export so downstream crates can name the bitmap type without a
/// direct `image` dependency.
pub use image::DynamicImage;
