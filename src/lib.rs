//! Shelfmark - a catalog manager for physical and periodical library items
//!
//! Shelfmark is a single-binary tool that keeps a personal catalog of books,
//! magazines, and newspapers in a flat JSON file and guards it against
//! invalid and duplicate entries.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the catalog)
//! - [`core`] - Domain types, the item model, catalog service, and configuration
//! - [`store`] - Single interface for catalog file persistence
//! - [`ui`] - Output formatting utilities
//!
//! # Correctness Invariants
//!
//! Shelfmark maintains the following invariants:
//!
//! 1. An invalid item is unrepresentable: every field is validated at
//!    construction time
//! 2. A structural duplicate is never appended or persisted
//! 3. Persistence is best-effort: load/save failures degrade to in-memory
//!    operation, never to a crash

pub mod cli;
pub mod core;
pub mod store;
pub mod ui;
