//! Integration tests for the persistence layer and catalog service.
//!
//! These tests exercise CatalogStore and Catalog against real files
//! created with tempfile, including the best-effort fallback paths.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use shelfmark::core::catalog::{Catalog, CatalogError};
use shelfmark::core::item::{Book, LibraryItem, Magazine, Newspaper};
use shelfmark::store::CatalogStore;

// =============================================================================
// Test Helpers
// =============================================================================

/// A catalog file inside a temporary directory.
struct TestCatalog {
    dir: TempDir,
}

impl TestCatalog {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    fn file(&self) -> PathBuf {
        self.dir.path().join("library.json")
    }

    fn store(&self) -> CatalogStore {
        CatalogStore::new(self.file())
    }

    fn open(&self) -> Catalog {
        Catalog::open(self.store())
    }

    fn write_file(&self, content: &str) {
        fs::write(self.file(), content).expect("write catalog file");
    }

    fn read_json(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.file()).expect("read catalog file");
        serde_json::from_str(&content).expect("parse catalog file")
    }
}

fn dune() -> LibraryItem {
    Book::new("Dune", "Herbert", "Ace", 1965).expect("valid book").into()
}

fn wired() -> LibraryItem {
    Magazine::new("Wired", 7, "Conde Nast", 2020)
        .expect("valid magazine")
        .into()
}

fn post() -> LibraryItem {
    Newspaper::new("The Post", "Bradlee", "WP Co", 1998)
        .expect("valid newspaper")
        .into()
}

// =============================================================================
// Store round-trips
// =============================================================================

mod store_roundtrip {
    use super::*;

    #[test]
    fn mixed_collection_roundtrips_in_order() {
        let fixture = TestCatalog::new();
        let items = vec![dune(), wired(), post()];

        fixture.store().save(&items);
        let loaded = fixture.store().load();

        assert_eq!(loaded, items);
    }

    #[test]
    fn save_writes_tagged_envelopes() {
        let fixture = TestCatalog::new();
        fixture.store().save(&[dune(), wired()]);

        let json = fixture.read_json();
        let records = json.as_array().expect("top-level array");
        assert_eq!(records.len(), 2);

        assert_eq!(records[0]["Type"], "Book");
        assert_eq!(records[0]["Data"]["Title"], "Dune");
        assert_eq!(records[0]["Data"]["Author"], "Herbert");
        assert_eq!(records[0]["Data"]["Publisher"], "Ace");
        assert_eq!(records[0]["Data"]["PublicationYear"], 1965);

        assert_eq!(records[1]["Type"], "Magazine");
        assert_eq!(records[1]["Data"]["IssueNumber"], 7);
    }

    #[test]
    fn save_overwrites_in_full() {
        let fixture = TestCatalog::new();
        fixture.store().save(&[dune(), wired(), post()]);
        fixture.store().save(&[dune()]);

        let records = fixture.read_json();
        assert_eq!(records.as_array().unwrap().len(), 1);
    }

    #[test]
    fn save_empty_collection() {
        let fixture = TestCatalog::new();
        fixture.store().save(&[]);
        assert_eq!(fixture.read_json(), serde_json::json!([]));
        assert!(fixture.store().load().is_empty());
    }
}

// =============================================================================
// Best-effort load fallbacks
// =============================================================================

mod load_fallbacks {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let fixture = TestCatalog::new();
        assert!(fixture.store().load().is_empty());
    }

    #[test]
    fn empty_and_whitespace_files_are_empty() {
        let fixture = TestCatalog::new();
        fixture.write_file("");
        assert!(fixture.store().load().is_empty());

        fixture.write_file("  \n\t ");
        assert!(fixture.store().load().is_empty());
    }

    #[test]
    fn top_level_parse_failure_is_empty() {
        let fixture = TestCatalog::new();
        fixture.write_file("{ \"Type\": \"Book\" ");
        assert!(fixture.store().load().is_empty());
    }

    #[test]
    fn non_array_top_level_is_empty() {
        let fixture = TestCatalog::new();
        fixture.write_file("{ \"Type\": \"Book\", \"Data\": {} }");
        assert!(fixture.store().load().is_empty());
    }

    #[test]
    fn unknown_discriminator_skipped_silently() {
        let fixture = TestCatalog::new();
        fixture.write_file(
            r#"[
              { "Type": "Audiobook", "Data": { "Title": "Dune" } },
              { "Type": "Book", "Data": { "Title": "Dune", "Author": "Herbert", "Publisher": "Ace", "PublicationYear": 1965 } }
            ]"#,
        );

        let loaded = fixture.store().load();
        assert_eq!(loaded, vec![dune()]);
    }

    #[test]
    fn malformed_record_does_not_abort_load() {
        let fixture = TestCatalog::new();
        fixture.write_file(
            r#"[
              { "Data": { "Title": "orphan payload" } },
              { "Type": "Book", "Data": { "Title": "", "Author": "x", "Publisher": "y", "PublicationYear": 1965 } },
              { "Type": "Magazine", "Data": { "Title": "Wired", "IssueNumber": 7, "Publisher": "Conde Nast", "PublicationYear": 2020 } },
              42
            ]"#,
        );

        // Only the well-formed magazine survives.
        let loaded = fixture.store().load();
        assert_eq!(loaded, vec![wired()]);
    }

    #[test]
    fn record_with_invalid_year_skipped() {
        let fixture = TestCatalog::new();
        fixture.write_file(
            r#"[
              { "Type": "Book", "Data": { "Title": "From The Future", "Author": "x", "Publisher": "y", "PublicationYear": 9999 } }
            ]"#,
        );
        assert!(fixture.store().load().is_empty());
    }
}

// =============================================================================
// Catalog service against real files
// =============================================================================

mod catalog_service {
    use super::*;

    #[test]
    fn add_persists_immediately() {
        let fixture = TestCatalog::new();
        let mut catalog = fixture.open();

        catalog.add(dune()).unwrap();
        assert!(fixture.file().exists());

        let records = fixture.read_json();
        assert_eq!(records.as_array().unwrap().len(), 1);
        assert_eq!(records[0]["Type"], "Book");
    }

    #[test]
    fn duplicate_rejected_file_untouched() {
        let fixture = TestCatalog::new();
        let mut catalog = fixture.open();

        catalog.add(dune()).unwrap();
        let before = fs::read_to_string(fixture.file()).unwrap();

        let err = catalog.add(dune()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateItem("Book")));
        assert_eq!(catalog.len(), 1);

        let after = fs::read_to_string(fixture.file()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn duplicate_detection_spans_restarts() {
        let fixture = TestCatalog::new();

        fixture.open().add(dune()).unwrap();

        // A fresh service instance loads the persisted list and still
        // detects the duplicate.
        let mut catalog = fixture.open();
        assert!(catalog.add(dune()).is_err());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn variant_is_part_of_identity() {
        let fixture = TestCatalog::new();
        let mut catalog = fixture.open();

        catalog.add(dune()).unwrap();
        catalog
            .add(Magazine::new("Dune", 1, "Ace", 1965).unwrap().into())
            .unwrap();

        assert_eq!(catalog.len(), 2);
        let records = fixture.read_json();
        assert_eq!(records[0]["Type"], "Book");
        assert_eq!(records[1]["Type"], "Magazine");
    }

    #[test]
    fn dune_scenario_end_to_end() {
        let fixture = TestCatalog::new();
        let mut catalog = fixture.open();
        catalog.add(dune()).unwrap();

        // listAll renders exactly one line containing all four values.
        let lines: Vec<String> = catalog.items().iter().map(|i| i.to_string()).collect();
        assert_eq!(lines.len(), 1);
        for needle in ["Dune", "Herbert", "Ace", "1965"] {
            assert!(lines[0].contains(needle), "missing {needle} in {}", lines[0]);
        }

        // The persisted file contains one Book envelope.
        let records = fixture.read_json();
        assert_eq!(records.as_array().unwrap().len(), 1);
        assert_eq!(records[0]["Type"], "Book");
    }

    #[test]
    fn survives_corrupt_file_then_repairs_on_next_save() {
        let fixture = TestCatalog::new();
        fixture.write_file("not json at all");

        let mut catalog = fixture.open();
        assert!(catalog.is_empty());

        catalog.add(dune()).unwrap();
        // The next save replaced the corrupt file with a valid one.
        assert_eq!(fixture.store().load(), vec![dune()]);
    }
}
