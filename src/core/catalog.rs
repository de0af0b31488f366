//! core::catalog
//!
//! The catalog service: the single owner of the in-memory item collection.
//!
//! # Lifecycle
//!
//! A [`Catalog`] loads the persisted collection once at construction and
//! from then on treats memory as authoritative. Every successful insert
//! rewrites the whole backing file through the [`CatalogStore`]; a failed
//! rewrite does not undo the insert (best-effort persistence).
//!
//! # Duplicate detection
//!
//! A linear scan in insertion order, O(n) per insert. Identity is the
//! structural equality of [`LibraryItem`]: same kind, same base
//! attributes, same kind-specific attribute, all compared exactly. The
//! first fully-equal existing item ends the scan.
//!
//! # Example
//!
//! ```no_run
//! use shelfmark::core::catalog::Catalog;
//! use shelfmark::core::item::Book;
//! use shelfmark::store::CatalogStore;
//!
//! let mut catalog = Catalog::open(CatalogStore::new("library.json"));
//! let book = Book::new("Dune", "Herbert", "Ace", 1965)?;
//! catalog.add(book.into())?;
//! for item in catalog.items() {
//!     println!("{item}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use thiserror::Error;

use crate::core::item::LibraryItem;
use crate::core::types::ItemError;
use crate::store::CatalogStore;

/// Errors surfaced by catalog operations.
///
/// Both kinds are recoverable: the CLI reports them and carries on.
/// Persistence failures are absorbed inside the store and never become
/// either of these.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An item field failed validation. Item construction is the only
    /// write site, so in practice this is raised before an item ever
    /// reaches the catalog; the variant keeps the taxonomy in one place
    /// for callers composing construction and insertion.
    #[error("invalid item data: {0}")]
    InvalidItemData(#[from] ItemError),

    /// The candidate structurally matches an existing record.
    #[error("duplicate item: an identical {0} is already in the catalog")]
    DuplicateItem(&'static str),
}

/// The in-memory catalog, exclusive owner of the ordered item collection.
pub struct Catalog {
    /// Items in insertion order. Order is significant for display.
    items: Vec<LibraryItem>,
    store: CatalogStore,
}

impl Catalog {
    /// Open a catalog, loading the persisted collection from the store.
    ///
    /// Load problems degrade to an empty catalog per the store's
    /// best-effort contract; opening never fails.
    pub fn open(store: CatalogStore) -> Self {
        let items = store.load();
        Self { items, store }
    }

    /// Add an item to the catalog.
    ///
    /// Runs duplicate detection against the current collection, then
    /// appends and rewrites the backing file in full. On
    /// [`CatalogError::DuplicateItem`] the collection and the file are
    /// both left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateItem`] if an identical record
    /// already exists.
    pub fn add(&mut self, item: LibraryItem) -> Result<(), CatalogError> {
        if self.contains(&item) {
            return Err(CatalogError::DuplicateItem(item.kind()));
        }

        self.items.push(item);
        // Whole-list rewrite; a failure here is absorbed by the store and
        // the in-memory add stands.
        self.store.save(&self.items);
        Ok(())
    }

    /// Whether a structural duplicate of `candidate` exists.
    ///
    /// Linear scan; equality is symmetric and exhaustive, so the result
    /// is independent of scan order.
    pub fn contains(&self, candidate: &LibraryItem) -> bool {
        self.items.iter().any(|existing| existing == candidate)
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[LibraryItem] {
        &self.items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
