use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{execute, queue};
use pa_core::art::AsciiArt;
use pa_core::palette::PaletteColor;

/// Per-character pacing; purely cosmetic.
const CHAR_DELAY: Duration = Duration::from_millis(3);

/// Three-tone row scheme: even row → red, else multiple of three →
/// yellow, else slate.
fn row_tone(row: usize) -> PaletteColor {
    if row % 2 == 0 {
        PaletteColor::Red
    } else if row % 3 == 0 {
        PaletteColor::Yellow
    } else {
        PaletteColor::Slate
    }
}

fn tone_color(tone: PaletteColor) -> Color {
    let (r, g, b) = tone.rgb();
    Color::Rgb { r, g, b }
}

/// Render the art character by character with a small delay,
/// left-to-right, top-to-bottom. Presentation effect only — the art
/// itself is not modified.
///
/// # Errors
/// Terminal write failure only.
pub fn draw_animated(art: &AsciiArt) -> Result<()> {
    let mut stdout = io::stdout();
    for (row, line) in art.lines().enumerate() {
        queue!(stdout, SetForegroundColor(tone_color(row_tone(row))))?;
        for glyph in line.chars() {
            queue!(stdout, Print(glyph))?;
            stdout.flush()?;
            thread::sleep(CHAR_DELAY);
        }
        queue!(stdout, Print("\n"))?;
        stdout.flush()?;
    }
    execute!(stdout, ResetColor)?;
    Ok(())
}
