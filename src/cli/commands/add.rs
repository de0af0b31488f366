//! add command - Add an item to the catalog
//!
//! Builds the requested item variant (which validates every field), then
//! hands it to the catalog, which rejects structural duplicates and
//! persists the updated collection. Both failure kinds surface as
//! [`CatalogError`].

use anyhow::Result;

use crate::cli::args::AddItem;
use crate::cli::Context;
use crate::core::catalog::{Catalog, CatalogError};
use crate::core::item::{Book, LibraryItem, Magazine, Newspaper};
use crate::store::CatalogStore;

/// Build the requested variant from raw arguments.
///
/// Field validation happens here, inside the constructors; failures wrap
/// into [`CatalogError::InvalidItemData`] so the command reports one
/// error taxonomy for construction and insertion alike.
fn build_item(args: AddItem) -> Result<LibraryItem, CatalogError> {
    let item = match args {
        AddItem::Book {
            title,
            author,
            publisher,
            year,
        } => Book::new(title, author, publisher, year)?.into(),
        AddItem::Magazine {
            title,
            issue,
            publisher,
            year,
        } => Magazine::new(title, issue, publisher, year)?.into(),
        AddItem::Newspaper {
            title,
            editor,
            publisher,
            year,
        } => Newspaper::new(title, editor, publisher, year)?.into(),
    };
    Ok(item)
}

/// Add an item to the catalog.
pub fn add(ctx: &Context, args: AddItem) -> Result<()> {
    let item = build_item(args)?;

    ctx.verbosity
        .debug(format!("using catalog file {}", ctx.catalog_path.display()));

    let mut catalog = Catalog::open(CatalogStore::new(&ctx.catalog_path));
    let line = item.to_string();
    catalog.add(item)?;

    ctx.verbosity.status(format!("Added: {line}"));
    ctx.verbosity
        .debug(format!("catalog now holds {} item(s)", catalog.len()));
    Ok(())
}
