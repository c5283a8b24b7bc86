use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use pa_core::art::AsciiArt;
use pa_core::error::CoreError;
use thiserror::Error;

/// SVG geometry for a 14px monospace grid.
const FONT_SIZE: f32 = 14.0;
const CELL_WIDTH: f32 = 8.5;
const CELL_HEIGHT: f32 = 17.0;
const MARGIN: f32 = 10.0;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Extension is neither .txt nor .svg; recovered by the caller.
    #[error(transparent)]
    UnsupportedExtension(#[from] CoreError),

    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persist the art to `.txt` (plain) or `.svg` (styled vector capture,
/// then opened in the default browser).
///
/// # Errors
/// [`StoreError::UnsupportedExtension`] for any other extension — the
/// caller prints a diagnostic and the run continues. I/O failures are
/// reported as [`StoreError::Io`].
pub fn store_art(
    path: &Path,
    art: &AsciiArt,
    color: Option<(u8, u8, u8)>,
) -> Result<(), StoreError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "txt" => write_file(path, &format!("{art}\n"))?,
        "svg" => {
            write_file(path, &render_svg(art, color))?;
            let absolute = path.canonicalize().unwrap_or_else(|_| path.to_owned());
            open_external(&format!("file://{}", absolute.display()));
        }
        other => {
            return Err(CoreError::UnsupportedExtension {
                extension: other.to_owned(),
            }
            .into());
        }
    }
    log::info!("stored ASCII art at {}", path.display());
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), StoreError> {
    fs::write(path, contents).map_err(|source| StoreError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Dark-background monospace SVG, one `<text>` row per art line.
///
/// White fill when no color was chosen (unlike the terminal, the dark
/// background makes unstyled text invisible otherwise).
fn render_svg(art: &AsciiArt, color: Option<(u8, u8, u8)>) -> String {
    let (r, g, b) = color.unwrap_or((255, 255, 255));
    let fill = format!("#{r:02x}{g:02x}{b:02x}");
    let width = art.column_count() as f32 * CELL_WIDTH + 2.0 * MARGIN;
    let height = art.row_count() as f32 * CELL_HEIGHT + 2.0 * MARGIN;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.0} {height:.0}\">"
    );
    let _ = writeln!(svg, "  <title>picascii ASCII Art</title>");
    let _ = writeln!(svg, "  <rect width=\"100%\" height=\"100%\" fill=\"#0c0c0c\"/>");
    let _ = writeln!(
        svg,
        "  <g font-family=\"monospace\" font-size=\"{FONT_SIZE}\" fill=\"{fill}\" xml:space=\"preserve\">"
    );
    for (row, line) in art.lines().enumerate() {
        let y = MARGIN + (row as f32 + 1.0) * CELL_HEIGHT - 4.0;
        let _ = writeln!(
            svg,
            "    <text x=\"{MARGIN}\" y=\"{y:.0}\">{}</text>",
            xml_escape(line)
        );
    }
    let _ = writeln!(svg, "  </g>");
    let _ = writeln!(svg, "</svg>");
    svg
}

fn xml_escape(line: &str) -> String {
    line.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Best-effort launch of the platform opener; failures only warn.
pub(crate) fn open_external(target: &str) {
    let spawned = if cfg!(target_os = "macos") {
        Command::new("open").arg(target).spawn()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", "", target]).spawn()
    } else {
        Command::new("xdg-open").arg(target).spawn()
    };
    if let Err(err) = spawned {
        log::warn!("could not open {target}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AsciiArt {
        AsciiArt::from_rows(["@@..", "..@@"])
    }

    #[test]
    fn txt_store_writes_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        store_art(&path, &sample(), None).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "@@..\n..@@\n");
    }

    #[test]
    fn wrong_extension_is_rejected_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let err = store_art(&path, &sample(), None);
        assert!(matches!(err, Err(StoreError::UnsupportedExtension(_))));
        assert!(!path.exists());
    }

    #[test]
    fn io_failure_is_a_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist, so the write itself fails;
        // this must not look like an extension problem to the caller.
        let path = dir.path().join("missing").join("out.txt");
        let err = store_art(&path, &sample(), None);
        assert!(matches!(err, Err(StoreError::Io { .. })));
    }

    #[test]
    fn svg_rows_are_escaped_and_styled() {
        let art = AsciiArt::from_rows(["<&>"]);
        let svg = render_svg(&art, Some((255, 0, 170)));
        assert!(svg.contains("&lt;&amp;&gt;"));
        assert!(svg.contains("fill=\"#ff00aa\""));
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn svg_defaults_to_white_fill() {
        let svg = render_svg(&sample(), None);
        assert!(svg.contains("fill=\"#ffffff\""));
        assert_eq!(svg.matches("<text").count(), 2);
    }
}
