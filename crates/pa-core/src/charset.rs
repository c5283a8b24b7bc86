use crate::error::CoreError;

/// 8 glyphes — preset 1, rampe par défaut.
pub const PRESET_DEFAULT: &[char] = &[' ', '.', '°', '*', 'o', 'O', '#', '@'];

/// 11 glyphes — preset 2 (le `.` en double est voulu, hérité de la rampe d'origine).
pub const PRESET_DENSE: &[char] = &['#', '?', '%', '.', 'S', '+', '.', '*', ':', ',', '@'];

/// Ordered glyph ramp, index 0 = darkest.
///
/// Luminance is bucketed into `ceil(256 / len)`-wide ranges; each range
/// maps to one glyph.
///
/// # Example
/// ```
/// use pa_core::charset::Charset;
/// let ramp = Charset::default();
/// assert_eq!(ramp.glyph_for(0), ' ');
/// assert_eq!(ramp.glyph_for(255), '@');
/// ```
#[derive(Clone, Debug)]
pub struct Charset {
    glyphs: Vec<char>,
}

impl Charset {
    /// Resolve a built-in preset (1 or 2).
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidPreset`] for any other id.
    pub fn preset(id: u8) -> Result<Self, CoreError> {
        match id {
            1 => Ok(Self {
                glyphs: PRESET_DEFAULT.to_vec(),
            }),
            2 => Ok(Self {
                glyphs: PRESET_DENSE.to_vec(),
            }),
            other => Err(CoreError::InvalidPreset(other)),
        }
    }

    /// Use a user-supplied ramp verbatim, darkest→brightest.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyCharset`] when the list is empty.
    pub fn custom(glyphs: Vec<char>) -> Result<Self, CoreError> {
        if glyphs.is_empty() {
            return Err(CoreError::EmptyCharset);
        }
        Ok(Self { glyphs })
    }

    /// Number of glyphs in the ramp.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Width of one luminance bucket: `ceil(256 / len)`.
    ///
    /// u32 because a 1-glyph ramp yields 256.
    #[must_use]
    pub fn range_width(&self) -> u32 {
        256u32.div_ceil(self.glyphs.len() as u32)
    }

    /// Map a luminance value [0..255] to a glyph.
    ///
    /// The ceiling division keeps `l / range_width` below `len` for every
    /// luminance; the clamp is belt-and-suspenders for the top edge.
    #[inline(always)]
    #[must_use]
    pub fn glyph_for(&self, luminance: u8) -> char {
        let index = (u32::from(luminance) / self.range_width()) as usize;
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }

    /// Glyphs in ramp order.
    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}

impl Default for Charset {
    /// Preset 1.
    fn default() -> Self {
        Self {
            glyphs: PRESET_DEFAULT.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_width_is_ceiling_division() {
        assert_eq!(Charset::preset(1).unwrap().range_width(), 32);
        assert_eq!(Charset::preset(2).unwrap().range_width(), 24);
        assert_eq!(Charset::custom(vec!['x']).unwrap().range_width(), 256);
        let max: Vec<char> = std::iter::repeat_n('x', 256).collect();
        assert_eq!(Charset::custom(max).unwrap().range_width(), 1);
    }

    #[test]
    fn bucket_index_never_out_of_bounds() {
        for n in [1usize, 2, 5, 7, 8, 11, 100, 255, 256] {
            let glyphs: Vec<char> = (0..n).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
            let ramp = Charset::custom(glyphs.clone()).unwrap();
            for l in 0..=255u8 {
                let idx = (u32::from(l) / ramp.range_width()) as usize;
                assert!(idx < n, "index {idx} escaped for len {n}, luminance {l}");
                // glyph_for must not panic either
                let _ = ramp.glyph_for(l);
            }
        }
    }

    #[test]
    fn preset_one_maps_extremes() {
        let ramp = Charset::preset(1).unwrap();
        assert_eq!(ramp.glyph_for(0), ' ');
        assert_eq!(ramp.glyph_for(255), '@');
        assert_eq!(ramp.glyph_for(31), ' ');
        assert_eq!(ramp.glyph_for(32), '.');
    }

    #[test]
    fn invalid_preset_is_rejected() {
        assert!(matches!(Charset::preset(3), Err(CoreError::InvalidPreset(3))));
        assert!(matches!(Charset::preset(0), Err(CoreError::InvalidPreset(0))));
    }

    #[test]
    fn empty_custom_charset_is_rejected() {
        assert!(matches!(Charset::custom(vec![]), Err(CoreError::EmptyCharset)));
    }
}
