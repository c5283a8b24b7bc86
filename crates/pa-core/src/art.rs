use std::fmt;

/// Rendered ASCII art: rows of glyphs joined by `\n`.
///
/// Every row has the same column count, except after aspect-ratio
/// correction which drops whole rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiArt {
    text: String,
}

impl AsciiArt {
    /// Join rows with newlines.
    #[must_use]
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let text = rows
            .into_iter()
            .map(|r| r.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join("\n");
        Self { text }
    }

    /// Wrap an already newline-joined text.
    #[must_use]
    pub fn from_text(text: String) -> Self {
        Self { text }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Widest row, in glyphs (not bytes — ramps may contain multi-byte
    /// characters such as `°`).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.text.lines().map(|l| l.chars().count()).max().unwrap_or(0)
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_newline_joined() {
        let art = AsciiArt::from_rows(["ab", "cd"]);
        assert_eq!(art.as_str(), "ab\ncd");
        assert_eq!(art.row_count(), 2);
        assert_eq!(art.column_count(), 2);
    }

    #[test]
    fn column_count_is_in_glyphs() {
        let art = AsciiArt::from_rows(["°°°"]);
        assert_eq!(art.column_count(), 3);
    }
}
