//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--catalog <path>`: Use this catalog file instead of the configured one
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shelfmark - a catalog manager for books, magazines, and newspapers
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this catalog file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add an item to the catalog
    #[command(
        name = "add",
        long_about = "Add an item to the catalog.\n\n\
            Every field is validated up front: titles, publishers, authors, and \
            editors must not be blank, the publication year must be between 1 and \
            the current year, and magazine issue numbers must be positive.\n\n\
            An item identical to one already in the catalog (same kind and same \
            value in every field) is rejected as a duplicate and nothing is written.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Add a book
    shelf add book --title Dune --author Herbert --publisher Ace --year 1965

    # Add a magazine issue
    shelf add magazine --title Wired --issue 7 --publisher 'Conde Nast' --year 2020

    # Add a newspaper
    shelf add newspaper --title 'The Post' --editor Bradlee --publisher 'WP Co' --year 1998"
    )]
    Add {
        #[command(subcommand)]
        item: AddItem,
    },

    /// List every item in the catalog
    #[command(
        name = "list",
        long_about = "List every item in the catalog, one line per item, in the \
            order they were added."
    )]
    List,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for Shelfmark \
            commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    shelf completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    shelf completion zsh >> ~/.zshrc

    # Fish
    shelf completion fish > ~/.config/fish/completions/shelf.fish

    # PowerShell
    shelf completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Item kinds accepted by `shelf add`.
#[derive(Subcommand, Debug)]
pub enum AddItem {
    /// Add a book
    Book {
        /// Title of the book
        #[arg(long)]
        title: String,

        /// Author of the book
        #[arg(long)]
        author: String,

        /// Publisher of the book
        #[arg(long)]
        publisher: String,

        /// Publication year (1 through the current year)
        #[arg(long)]
        year: i32,
    },

    /// Add a magazine issue
    Magazine {
        /// Title of the magazine
        #[arg(long)]
        title: String,

        /// Issue number (must be positive)
        #[arg(long)]
        issue: u32,

        /// Publisher of the magazine
        #[arg(long)]
        publisher: String,

        /// Publication year (1 through the current year)
        #[arg(long)]
        year: i32,
    },

    /// Add a newspaper
    Newspaper {
        /// Title of the newspaper
        #[arg(long)]
        title: String,

        /// Editor of the newspaper
        #[arg(long)]
        editor: String,

        /// Publisher of the newspaper
        #[arg(long)]
        publisher: String,

        /// Publication year (1 through the current year)
        #[arg(long)]
        year: i32,
    },
}
