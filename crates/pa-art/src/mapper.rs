use image::DynamicImage;
use image::imageops::FilterType;
use pa_core::art::AsciiArt;
use pa_core::config::RenderConfig;

/// Target dimensions for a bitmap rendered at `columns` wide.
///
/// `rows = round(height/width / 2 * columns)` — the `/2` compensates for
/// terminal glyphs being roughly twice as tall as wide. Never below 1.
///
/// # Example
/// ```
/// use pa_art::mapper::resize_dimensions;
/// assert_eq!(resize_dimensions(100, 50, 100), (100, 25));
/// ```
#[must_use]
pub fn resize_dimensions(width: u32, height: u32, columns: u32) -> (u32, u32) {
    let aspect_ratio = f64::from(height) / f64::from(width);
    let rows = (aspect_ratio / 2.0 * f64::from(columns)).round().max(1.0) as u32;
    (columns, rows)
}

/// Convert a bitmap into ASCII art.
///
/// Resize to the configured column count, grayscale, optionally invert
/// luminance, then bucket each pixel into the glyph ramp.
#[must_use]
pub fn render_ascii(image: &DynamicImage, config: &RenderConfig) -> AsciiArt {
    let (columns, rows) = resize_dimensions(image.width(), image.height(), config.columns);
    let gray = image
        .resize_exact(columns, rows, FilterType::CatmullRom)
        .to_luma8();

    let mut art_rows = Vec::with_capacity(rows as usize);
    for y in 0..rows {
        let mut row = String::with_capacity(columns as usize);
        for x in 0..columns {
            let mut luminance = gray.get_pixel(x, y).0[0];
            if config.invert {
                luminance = 255 - luminance;
            }
            row.push(config.charset.glyph_for(luminance));
        }
        art_rows.push(row);
    }
    log::debug!("rendered {columns}×{rows} glyph grid");
    AsciiArt::from_rows(art_rows)
}

/// Aspect-ratio correction: drop every 4th row (`index % 4 == 0`).
///
/// The glyph grid renders taller than a 1:1 cell; dropping a quarter of
/// the rows compresses the vertical extent. Fixed policy, not derived.
#[must_use]
pub fn fix_aspect_ratio(art: &AsciiArt) -> AsciiArt {
    let kept = art
        .lines()
        .enumerate()
        .filter(|(index, _)| index % 4 != 0)
        .map(|(_, row)| row);
    AsciiArt::from_rows(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use pa_core::charset::Charset;

    fn uniform(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value, value, value])))
    }

    #[test]
    fn dimensions_preserve_halved_aspect_ratio() {
        assert_eq!(resize_dimensions(100, 50, 100), (100, 25));
        assert_eq!(resize_dimensions(200, 200, 100), (100, 50));
        assert_eq!(resize_dimensions(1000, 10, 100), (100, 1));
        for (w, h) in [(640, 480), (1920, 1080), (33, 77)] {
            let (cols, rows) = resize_dimensions(w, h, 100);
            let expected = (f64::from(h) / f64::from(w) / 2.0 * 100.0).round() as u32;
            assert_eq!((cols, rows), (100, expected.max(1)));
        }
    }

    #[test]
    fn white_image_maps_to_brightest_glyph() {
        let config = RenderConfig::default();
        let art = render_ascii(&uniform(100, 50, 255), &config);
        assert_eq!(art.row_count(), 25);
        for line in art.lines() {
            assert_eq!(line.chars().count(), 100);
            assert!(line.chars().all(|c| c == '@'), "unexpected glyph in {line:?}");
        }
    }

    #[test]
    fn black_image_maps_to_darkest_glyph() {
        let config = RenderConfig::default();
        let art = render_ascii(&uniform(100, 50, 0), &config);
        assert!(art.lines().all(|l| l.chars().all(|c| c == ' ')));
    }

    #[test]
    fn inversion_swaps_extremes() {
        let config = RenderConfig {
            invert: true,
            ..RenderConfig::default()
        };
        let art = render_ascii(&uniform(100, 50, 0), &config);
        assert!(art.lines().all(|l| l.chars().all(|c| c == '@')));
    }

    #[test]
    fn double_inversion_matches_plain_bucketing() {
        // 255 - (255 - v) == v, so inverting an inverted luminance must
        // land in the original bucket.
        let ramp = Charset::default();
        for v in 0..=255u8 {
            assert_eq!(ramp.glyph_for(255 - (255 - v)), ramp.glyph_for(v));
        }
    }

    #[test]
    fn aspect_fix_drops_every_fourth_row() {
        let rows: Vec<String> = (0..8).map(|i| format!("row{i}")).collect();
        let fixed = fix_aspect_ratio(&AsciiArt::from_rows(rows));
        let kept: Vec<&str> = fixed.lines().collect();
        assert_eq!(kept, ["row1", "row2", "row3", "row5", "row6", "row7"]);
    }
}
