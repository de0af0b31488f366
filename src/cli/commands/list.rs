//! list command - Display every catalog item
//!
//! Renders each item on its own line, in insertion order. Read-only.

use anyhow::Result;

use crate::cli::Context;
use crate::core::catalog::Catalog;
use crate::store::CatalogStore;

/// List every item in the catalog.
pub fn list(ctx: &Context) -> Result<()> {
    let catalog = Catalog::open(CatalogStore::new(&ctx.catalog_path));

    if catalog.is_empty() {
        ctx.verbosity.status("The catalog is empty.");
        return Ok(());
    }

    // Item lines are the command's output; they print even in quiet mode.
    for item in catalog.items() {
        println!("{item}");
    }

    ctx.verbosity
        .debug(format!("{} item(s) listed", catalog.len()));
    Ok(())
}
