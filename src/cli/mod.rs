//! cli
//!
//! Command-line interface layer for Shelfmark.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT perform validation or duplicate logic itself
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that drive [`crate::core::catalog::Catalog`]. The two domain
//! error kinds (invalid item data, duplicate item) propagate here and are
//! reported without terminating anything beyond the current invocation.

pub mod args;
pub mod commands;

pub use args::Cli;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::ui::output::Verbosity;

/// Per-invocation context derived from flags and config.
pub struct Context {
    /// Resolved catalog file path (CLI flag wins over config).
    pub catalog_path: PathBuf,
    pub verbosity: Verbosity,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = Config::load().context("failed to load configuration")?;
    let catalog_path = cli.catalog.clone().unwrap_or_else(|| config.catalog_path());

    let ctx = Context {
        catalog_path,
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    // Dispatch to command handler
    commands::dispatch(cli.command, &ctx)
}
