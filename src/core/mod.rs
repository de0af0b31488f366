//! core
//!
//! Core domain types and operations for Shelfmark.
//!
//! # Modules
//!
//! - [`types`] - Strong field types: Title, PublicationYear, IssueNumber, etc.
//! - [`item`] - The LibraryItem tagged union and its three variants
//! - [`catalog`] - The catalog service: add, list, duplicate detection
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - The variant set is closed; dispatch over it is exhaustive
//! - Persistence is best-effort and never interrupts the user flow

pub mod catalog;
pub mod config;
pub mod item;
pub mod types;
