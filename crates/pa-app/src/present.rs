use std::io;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::execute;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use pa_core::art::AsciiArt;

const VERBS: &[&str] = &[
    "Articulating",
    "Coordinating",
    "Gathering",
    "Powering up",
    "Clicking on",
    "Backing up",
    "Extrapolating",
    "Authenticating",
    "Recovering",
    "Finalizing",
    "Testing",
    "Upgrading",
    "Launching",
    "Logging",
    "Scanning",
    "Setting up",
    "Tracking",
    "Finding",
    "Cloning",
    "Forking",
    "Booting up",
    "Loading in",
];

const NOUNS: &[&str] = &[
    "scope",
    "lunch",
    "meetings",
    "skeletons",
    "devices",
    "margins",
    "bookmarks",
    "CPUs",
    "folders",
    "emails",
    "disks",
    "JPEGs",
    "ROMs",
    "RAMs",
    "repositories",
    "viruses",
    "messages",
    "errors",
    "progress bar",
    "users",
];

const HYPE_STEPS: usize = 4;
const HYPE_DELAY: Duration = Duration::from_millis(400);

/// Cosmetic welcome banner.
///
/// # Errors
/// Terminal write failure only.
pub fn welcome() -> Result<()> {
    execute!(
        io::stdout(),
        SetAttribute(Attribute::Bold),
        SetForegroundColor(Color::Yellow),
        Print("Welcome to ASCII ART Generator!\n"),
        SetAttribute(Attribute::Reset),
        ResetColor,
    )?;
    Ok(())
}

/// Simulated progress sequence: random verb+noun pairs with fixed
/// delays. Pure engagement theater — no effect on the rendered result.
///
/// # Errors
/// Terminal write failure only.
pub fn hype() -> Result<()> {
    let mut stdout = io::stdout();
    for _ in 0..HYPE_STEPS {
        let verb = VERBS[fastrand::usize(0..VERBS.len())];
        let noun = NOUNS[fastrand::usize(0..NOUNS.len())];
        execute!(
            stdout,
            SetForegroundColor(Color::Green),
            Print(format!("{verb} {noun}...\n")),
            ResetColor,
        )?;
        thread::sleep(HYPE_DELAY);
    }
    execute!(
        stdout,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(Color::Green),
        Print("Here we go...!\n"),
        SetAttribute(Attribute::Reset),
        ResetColor,
    )?;
    Ok(())
}

/// Print the art, styled with the resolved foreground color when given.
///
/// # Errors
/// Terminal write failure only.
pub fn print_art(art: &AsciiArt, color: Option<(u8, u8, u8)>) -> Result<()> {
    match color {
        Some((r, g, b)) => {
            execute!(
                io::stdout(),
                SetForegroundColor(Color::Rgb { r, g, b }),
                Print(art.as_str()),
                Print("\n"),
                ResetColor,
            )?;
        }
        None => println!("{art}"),
    }
    Ok(())
}
