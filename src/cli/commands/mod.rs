//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Builds domain values from command-specific arguments
//! 2. Calls the catalog service to execute the command
//! 3. Formats and displays output
//!
//! Handlers do NOT validate fields or detect duplicates themselves; the
//! item model and the catalog own those rules.

mod add;
mod completion;
mod list;

// Re-export command functions for testing and direct invocation
pub use add::add;
pub use completion::completion;
pub use list::list;

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Add { item } => add(ctx, item),
        Command::List => list(ctx),
        Command::Completion { shell } => completion(shell),
    }
}
