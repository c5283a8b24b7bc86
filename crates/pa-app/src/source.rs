use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use pa_art::{DynamicImage, LoadError, load_from_bytes, load_from_path};

const DIAG_NOT_FOUND: &str = "The specified path does not exist, please try again.";
const DIAG_NOT_AN_IMAGE: &str = "The specified path is not of a valid image, please try again.";

/// Outcome of one prompt read.
enum Prompt {
    Line(String),
    Cancelled,
}

/// Obtain a decoded bitmap from stdin, the CLI path, or an interactive
/// retry prompt.
///
/// Piped input is fatal on decode failure: the bytes are already
/// consumed, there is nothing left to solicit.
///
/// # Errors
/// Only for the non-interactive paths (stdin read/decode, terminal
/// handling); interactive load errors are recovered by re-prompting.
pub fn obtain_image(cli_path: Option<PathBuf>) -> Result<DynamicImage> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut bytes = Vec::new();
        stdin
            .lock()
            .read_to_end(&mut bytes)
            .context("reading image bytes from stdin")?;
        return load_from_bytes(&bytes).context("stdin did not contain a decodable image");
    }
    interactive_load(cli_path)
}

/// Explicit retry loop (not recursion — invalid paths can pile up).
fn interactive_load(mut pending: Option<PathBuf>) -> Result<DynamicImage> {
    if pending.is_none() {
        println!("No path specified as argument, please type a path to an image or Ctrl-C to quit.");
    }
    loop {
        let candidate = match pending.take() {
            Some(path) => path,
            None => match read_prompt_line()? {
                Prompt::Line(line) => PathBuf::from(line.trim()),
                Prompt::Cancelled => {
                    if confirm_quit()? {
                        // Confirmed quit terminates with no further output.
                        std::process::exit(0);
                    }
                    println!("{DIAG_NOT_AN_IMAGE}");
                    continue;
                }
            },
        };
        match load_from_path(&candidate) {
            Ok(image) => return Ok(image),
            Err(LoadError::NotFound(_)) => println!("{DIAG_NOT_FOUND}"),
            Err(err) => {
                log::debug!("load failed: {err}");
                println!("{DIAG_NOT_AN_IMAGE}");
            }
        }
    }
}

fn confirm_quit() -> Result<bool> {
    println!("Are you sure you want to quit Y/N : ");
    match read_prompt_line()? {
        Prompt::Line(answer) => Ok(answer.trim().eq_ignore_ascii_case("y")),
        Prompt::Cancelled => Ok(true),
    }
}

/// Read one line in raw mode so Ctrl-C arrives as a key event instead of
/// killing the process before the quit confirmation.
fn read_prompt_line() -> Result<Prompt> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt_line(""))?;
    stdout.flush()?;

    terminal::enable_raw_mode().context("enabling raw terminal mode")?;
    let outcome = read_keys(&mut stdout);
    // Restore the terminal before anything else, error path included.
    terminal::disable_raw_mode().ok();
    writeln!(stdout)?;
    outcome
}

fn read_keys(stdout: &mut impl Write) -> Result<Prompt> {
    let mut line = String::new();
    loop {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }
        match code {
            KeyCode::Char('c' | 'd') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Prompt::Cancelled);
            }
            KeyCode::Enter => return Ok(Prompt::Line(line)),
            KeyCode::Backspace => {
                // Redraw the whole line: a per-char `\b \b` erase
                // misrenders double-width glyphs.
                if line.pop().is_some() {
                    execute!(
                        stdout,
                        Print("\r"),
                        Clear(ClearType::CurrentLine),
                        Print(prompt_line(&line)),
                    )?;
                }
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                line.push(c);
                write!(stdout, "{c}")?;
                stdout.flush()?;
            }
            _ => {}
        }
    }
}

/// Prompt prefix plus the pending input, reprinted in full on edits.
fn prompt_line(line: &str) -> String {
    format!("> {line}")
}
