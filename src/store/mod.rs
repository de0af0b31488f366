//! store
//!
//! Flat-file persistence for the catalog.
//!
//! # Format
//!
//! The backing file holds a JSON array of self-describing envelopes:
//!
//! ```json
//! [
//!   { "Type": "Book", "Data": { "Title": "...", "Author": "...", ... } }
//! ]
//! ```
//!
//! The `Type` discriminator names the item kind and `Data` carries that
//! kind's attributes. Encode and decode are an explicit pair keyed by the
//! tag string; unknown tags are skipped, not errored, so older files with
//! kinds this build does not know about still load.
//!
//! # Best-effort contract
//!
//! Persistence failures are never fatal. A missing, empty, or unparseable
//! file loads as an empty catalog, and a failed save leaves the in-memory
//! collection authoritative for the rest of the process. Both fallbacks
//! are explicit branches that warn on stderr rather than silent
//! suppression.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::core::item::{Book, LibraryItem, Magazine, Newspaper};

/// Errors from catalog file operations.
///
/// These never escape [`CatalogStore::load`] / [`CatalogStore::save`]; they
/// exist so the fallback branches have something concrete to report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read catalog file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse catalog file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to serialize catalog: {0}")]
    Serialize(String),

    #[error("failed to write catalog file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The `{Type, Data}` wrapper that makes a polymorphic record
/// self-describing in the persisted file.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Data")]
    data: Value,
}

/// Encode one item as a tagged envelope.
fn encode(item: &LibraryItem) -> Result<Envelope, serde_json::Error> {
    let data = match item {
        LibraryItem::Book(b) => serde_json::to_value(b)?,
        LibraryItem::Magazine(m) => serde_json::to_value(m)?,
        LibraryItem::Newspaper(n) => serde_json::to_value(n)?,
    };
    Ok(Envelope {
        kind: item.kind().to_string(),
        data,
    })
}

/// Decode one record from the envelope array.
///
/// Returns `None` for records that are not envelopes, carry an unknown
/// tag, or hold a payload that fails item validation. A bad record never
/// aborts the rest of the load.
fn decode(record: Value) -> Option<LibraryItem> {
    let envelope: Envelope = serde_json::from_value(record).ok()?;
    match envelope.kind.as_str() {
        "Book" => serde_json::from_value::<Book>(envelope.data)
            .ok()
            .map(LibraryItem::Book),
        "Magazine" => serde_json::from_value::<Magazine>(envelope.data)
            .ok()
            .map(LibraryItem::Magazine),
        "Newspaper" => serde_json::from_value::<Newspaper>(envelope.data)
            .ok()
            .map(LibraryItem::Newspaper),
        _ => None,
    }
}

/// Catalog persistence bound to a single backing file.
///
/// Every save rewrites the whole file; there is no append or incremental
/// patch. That keeps the format trivial and rules out record-level partial
/// writes at the cost of O(n) I/O per insert, which is fine at
/// single-user catalog scale.
///
/// # Example
///
/// ```no_run
/// use shelfmark::store::CatalogStore;
///
/// let store = CatalogStore::new("library.json");
/// let items = store.load();
/// store.save(&items);
/// ```
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not touched until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full item collection from the backing file.
    ///
    /// Never fails: any read or top-level parse problem falls back to an
    /// empty collection after warning on stderr.
    pub fn load(&self) -> Vec<LibraryItem> {
        match self.try_load() {
            Ok(items) => items,
            Err(err) => {
                // Fall back to an empty catalog; the file is left untouched
                // until the next save.
                eprintln!("warning: {err}; starting with an empty catalog");
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> Result<Vec<LibraryItem>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }

        // Only a top-level parse failure aborts the load; individual
        // records are decoded best-effort below.
        let records: Vec<Value> =
            serde_json::from_str(&json).map_err(|err| StoreError::Parse {
                path: self.path.clone(),
                message: err.to_string(),
            })?;

        Ok(records.into_iter().filter_map(decode).collect())
    }

    /// Overwrite the backing file with the full item collection.
    ///
    /// Best-effort: on failure the file may be stale but the in-memory
    /// collection remains authoritative, so the error is reported on
    /// stderr and otherwise absorbed.
    pub fn save(&self, items: &[LibraryItem]) {
        if let Err(err) = self.try_save(items) {
            eprintln!("warning: {err}; catalog changes are kept in memory only");
        }
    }

    fn try_save(&self, items: &[LibraryItem]) -> Result<(), StoreError> {
        let envelopes = items
            .iter()
            .map(encode)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| StoreError::Serialize(err.to_string()))?;

        let json = serde_json::to_string_pretty(&envelopes)
            .map_err(|err| StoreError::Serialize(err.to_string()))?;

        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}
