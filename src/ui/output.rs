//! ui::output
//!
//! Console output helpers.
//!
//! # Design
//!
//! Verbosity is resolved once from the global flags and carried in the
//! CLI context; output routing hangs off it as methods. Status lines go
//! to stdout and disappear under `--quiet`, debug detail goes to stderr
//! and appears only under `--debug`, and errors always reach stderr.

use std::fmt::Display;

/// Output verbosity, resolved from the global `--quiet`/`--debug` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Debug,
}

impl Verbosity {
    /// Resolve verbosity from the global flags. Quiet wins over debug.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        match (quiet, debug) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Debug,
            (false, false) => Verbosity::Normal,
        }
    }

    /// Whether status lines should be printed.
    pub fn shows_status(self) -> bool {
        self != Verbosity::Quiet
    }

    /// Whether debug detail should be printed.
    pub fn shows_debug(self) -> bool {
        self == Verbosity::Debug
    }

    /// Print a status line to stdout, suppressed under `--quiet`.
    pub fn status(self, message: impl Display) {
        if self.shows_status() {
            println!("{message}");
        }
    }

    /// Print debug detail to stderr, shown only under `--debug`.
    pub fn debug(self, message: impl Display) {
        if self.shows_debug() {
            eprintln!("[debug] {message}");
        }
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {message}");
}
