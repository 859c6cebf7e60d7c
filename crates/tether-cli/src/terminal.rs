use std::io::{self, BufRead, Write};

use tether_core::{Prompter, ThemeSurface};
use tracing::{debug, warn};

/// Notices go to stderr; confirmations read a `y`/`yes` answer from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter {
    assume_yes: bool,
}

impl TerminalPrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            debug!(%message, "confirmed by --yes");
            return true;
        }

        let mut err = io::stderr().lock();
        if write!(err, "{message} [y/N] ").and_then(|()| err.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(error) => {
                warn!(%error, "could not read confirmation");
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// ANSI colour codes for the current theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalPalette {
    dark: bool,
}

impl TerminalPalette {
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn id_code(&self) -> &'static str {
        if self.dark { "93" } else { "33" }
    }

    pub fn link_code(&self) -> &'static str {
        if self.dark { "96" } else { "34" }
    }

    pub fn done_code(&self) -> &'static str {
        if self.dark { "90" } else { "37" }
    }
}

impl ThemeSurface for TerminalPalette {
    fn apply_theme(&mut self, dark: bool) {
        self.dark = dark;
    }
}
