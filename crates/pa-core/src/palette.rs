/// Width of one luminance band for palette mapping.
pub const LUMINANCE_BAND: u32 = 86;

/// Fixed 6-entry terminal palette used by the drawing and black-yellow
/// modes, ordered by luminance band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteColor {
    Pink,
    Blue,
    Yellow,
    Green,
    Red,
    Slate,
}

impl PaletteColor {
    /// Band order: index = `min(luminance / 86, 5)`.
    pub const ORDER: [Self; 6] = [
        Self::Pink,
        Self::Blue,
        Self::Yellow,
        Self::Green,
        Self::Red,
        Self::Slate,
    ];

    /// Map a luminance value to its palette band.
    ///
    /// Clamped to the last entry: the band division has no intrinsic
    /// upper bound check, so the top edge is pinned explicitly.
    ///
    /// # Example
    /// ```
    /// use pa_core::palette::PaletteColor;
    /// assert_eq!(PaletteColor::from_luminance(0), PaletteColor::Pink);
    /// assert_eq!(PaletteColor::from_luminance(255), PaletteColor::Yellow);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn from_luminance(luminance: u8) -> Self {
        let index = (u32::from(luminance) / LUMINANCE_BAND).min(5) as usize;
        Self::ORDER[index]
    }

    /// ANSI bright escape sequence for terminal output.
    #[must_use]
    pub fn ansi(self) -> &'static str {
        match self {
            Self::Pink => "\x1b[1;35m",
            Self::Blue => "\x1b[1;34m",
            Self::Yellow => "\x1b[1;33m",
            Self::Green => "\x1b[1;32m",
            Self::Red => "\x1b[1;31m",
            Self::Slate => "\x1b[1;30m",
        }
    }

    /// RGB equivalent (xterm bright values) for image reconstruction.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Pink => (255, 85, 255),
            Self::Blue => (85, 85, 255),
            Self::Yellow => (255, 255, 85),
            Self::Green => (85, 255, 85),
            Self::Red => (255, 85, 85),
            Self::Slate => (85, 85, 85),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Red => "red",
            Self::Slate => "slate",
        }
    }
}

/// Grid of palette colors, one cell per pixel of the resized bitmap.
#[derive(Clone, Debug)]
pub struct ColorMatrix {
    cells: Vec<PaletteColor>,
    width: u32,
    height: u32,
}

impl ColorMatrix {
    /// Build a matrix from row-major cells.
    ///
    /// # Panics
    /// Panics if `cells.len() != width * height`.
    #[must_use]
    pub fn new(cells: Vec<PaletteColor>, width: u32, height: u32) -> Self {
        assert_eq!(cells.len(), (width * height) as usize);
        Self {
            cells,
            width,
            height,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell at (x, y), row-major.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> PaletteColor {
        self.cells[(y * self.width + x) as usize]
    }
}

/// Resolve a user style spec — a color name or `#rrggbb` hex — to RGB.
///
/// Returns `None` for anything unrecognised; the caller decides whether
/// to warn or fall back to plain output.
///
/// # Example
/// ```
/// use pa_core::palette::parse_style;
/// assert_eq!(parse_style("red"), Some((255, 85, 85)));
/// assert_eq!(parse_style("#00ff00"), Some((0, 255, 0)));
/// assert_eq!(parse_style("mauve-ish"), None);
/// ```
#[must_use]
pub fn parse_style(spec: &str) -> Option<(u8, u8, u8)> {
    if let Some(hex) = spec.strip_prefix('#') {
        return parse_hex(hex);
    }
    let named = match spec.to_ascii_lowercase().as_str() {
        "pink" | "magenta" => PaletteColor::Pink.rgb(),
        "blue" => PaletteColor::Blue.rgb(),
        "yellow" => PaletteColor::Yellow.rgb(),
        "green" => PaletteColor::Green.rgb(),
        "red" => PaletteColor::Red.rgb(),
        "slate" | "grey" | "gray" => PaletteColor::Slate.rgb(),
        "cyan" => (85, 255, 255),
        "white" => (255, 255, 255),
        "black" => (0, 0, 0),
        "orange" => (255, 165, 0),
        "purple" => (160, 32, 240),
        _ => return None,
    };
    Some(named)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banding_follows_86_wide_ranges() {
        assert_eq!(PaletteColor::from_luminance(0), PaletteColor::Pink);
        assert_eq!(PaletteColor::from_luminance(85), PaletteColor::Pink);
        assert_eq!(PaletteColor::from_luminance(86), PaletteColor::Blue);
        assert_eq!(PaletteColor::from_luminance(171), PaletteColor::Blue);
        assert_eq!(PaletteColor::from_luminance(172), PaletteColor::Yellow);
        assert_eq!(PaletteColor::from_luminance(255), PaletteColor::Yellow);
    }

    #[test]
    fn band_index_stays_in_palette() {
        for l in 0..=255u8 {
            // from_luminance must never panic, whatever the band math says
            let _ = PaletteColor::from_luminance(l);
        }
    }

    #[test]
    fn matrix_is_row_major() {
        let cells = vec![
            PaletteColor::Pink,
            PaletteColor::Blue,
            PaletteColor::Red,
            PaletteColor::Slate,
        ];
        let matrix = ColorMatrix::new(cells, 2, 2);
        assert_eq!(matrix.get(0, 0), PaletteColor::Pink);
        assert_eq!(matrix.get(1, 0), PaletteColor::Blue);
        assert_eq!(matrix.get(0, 1), PaletteColor::Red);
        assert_eq!(matrix.get(1, 1), PaletteColor::Slate);
    }

    #[test]
    fn ansi_escapes_are_bright_variants() {
        assert_eq!(PaletteColor::Pink.ansi(), "\x1b[1;35m");
        assert_eq!(PaletteColor::Slate.ansi(), "\x1b[1;30m");
        assert_eq!(PaletteColor::Red.name(), "red");
    }

    #[test]
    fn style_parsing_accepts_names_and_hex() {
        assert_eq!(parse_style("YELLOW"), Some((255, 255, 85)));
        assert_eq!(parse_style("#ffffff"), Some((255, 255, 255)));
        assert_eq!(parse_style("#FF00aa"), Some((255, 0, 170)));
        assert_eq!(parse_style("#fff"), None);
        assert_eq!(parse_style("#gggggg"), None);
        assert_eq!(parse_style("not-a-color"), None);
    }
}
