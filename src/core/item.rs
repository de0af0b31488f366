//! core::item
//!
//! The catalog item model.
//!
//! # Design
//!
//! [`LibraryItem`] is a closed tagged union over the three item kinds.
//! Each variant struct carries the base attributes (title, publisher,
//! publication year) plus one kind-specific attribute. All fields are
//! validated newtypes from [`crate::core::types`], so a variant value is
//! valid by construction.
//!
//! Structural equality (derived `PartialEq`/`Eq`) is the identity relation
//! for duplicate detection: two items are the same record exactly when the
//! kind and every attribute compare equal (case-sensitive strings, exact
//! integers). There is no separate identity field.
//!
//! # Example
//!
//! ```
//! use shelfmark::core::item::{Book, LibraryItem};
//!
//! let book = Book::new("Dune", "Herbert", "Ace", 1965).unwrap();
//! let item = LibraryItem::Book(book);
//! assert_eq!(item.to_string(), "Book | Dune | Herbert | Ace | 1965");
//! assert_eq!(item.kind(), "Book");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::types::{
    Author, Editor, IssueNumber, ItemError, PublicationYear, Publisher, Title,
};

/// A book with an author.
///
/// Field order matches the persisted payload order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    pub title: Title,
    pub author: Author,
    pub publisher: Publisher,
    pub publication_year: PublicationYear,
}

impl Book {
    /// Construct a book from raw attribute values.
    ///
    /// # Errors
    ///
    /// Returns the [`ItemError`] of the first invalid field.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        publication_year: i32,
    ) -> Result<Self, ItemError> {
        Ok(Self {
            title: Title::new(title)?,
            author: Author::new(author)?,
            publisher: Publisher::new(publisher)?,
            publication_year: PublicationYear::new(publication_year)?,
        })
    }
}

/// A magazine (periodical) with an issue number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Magazine {
    pub title: Title,
    pub issue_number: IssueNumber,
    pub publisher: Publisher,
    pub publication_year: PublicationYear,
}

impl Magazine {
    /// Construct a magazine from raw attribute values.
    ///
    /// # Errors
    ///
    /// Returns the [`ItemError`] of the first invalid field.
    pub fn new(
        title: impl Into<String>,
        issue_number: u32,
        publisher: impl Into<String>,
        publication_year: i32,
    ) -> Result<Self, ItemError> {
        Ok(Self {
            title: Title::new(title)?,
            issue_number: IssueNumber::new(issue_number)?,
            publisher: Publisher::new(publisher)?,
            publication_year: PublicationYear::new(publication_year)?,
        })
    }
}

/// A newspaper with an editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Newspaper {
    pub title: Title,
    pub editor: Editor,
    pub publisher: Publisher,
    pub publication_year: PublicationYear,
}

impl Newspaper {
    /// Construct a newspaper from raw attribute values.
    ///
    /// # Errors
    ///
    /// Returns the [`ItemError`] of the first invalid field.
    pub fn new(
        title: impl Into<String>,
        editor: impl Into<String>,
        publisher: impl Into<String>,
        publication_year: i32,
    ) -> Result<Self, ItemError> {
        Ok(Self {
            title: Title::new(title)?,
            editor: Editor::new(editor)?,
            publisher: Publisher::new(publisher)?,
            publication_year: PublicationYear::new(publication_year)?,
        })
    }
}

/// A catalog item: one of the three concrete kinds.
///
/// The set of kinds is closed; duplicate detection and serialization are
/// total functions over it via exhaustive matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryItem {
    Book(Book),
    Magazine(Magazine),
    Newspaper(Newspaper),
}

impl LibraryItem {
    /// The kind tag, as used in the persisted envelope discriminator.
    pub fn kind(&self) -> &'static str {
        match self {
            LibraryItem::Book(_) => "Book",
            LibraryItem::Magazine(_) => "Magazine",
            LibraryItem::Newspaper(_) => "Newspaper",
        }
    }

    /// The item title.
    pub fn title(&self) -> &Title {
        match self {
            LibraryItem::Book(b) => &b.title,
            LibraryItem::Magazine(m) => &m.title,
            LibraryItem::Newspaper(n) => &n.title,
        }
    }
}

impl std::fmt::Display for LibraryItem {
    /// One human-readable line containing every attribute of the item.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LibraryItem::Book(b) => write!(
                f,
                "Book | {} | {} | {} | {}",
                b.title, b.author, b.publisher, b.publication_year
            ),
            LibraryItem::Magazine(m) => write!(
                f,
                "Magazine | {} | Issue {} | {} | {}",
                m.title, m.issue_number, m.publisher, m.publication_year
            ),
            LibraryItem::Newspaper(n) => write!(
                f,
                "Newspaper | {} | Editor {} | {} | {}",
                n.title, n.editor, n.publisher, n.publication_year
            ),
        }
    }
}

impl From<Book> for LibraryItem {
    fn from(book: Book) -> Self {
        LibraryItem::Book(book)
    }
}

impl From<Magazine> for LibraryItem {
    fn from(magazine: Magazine) -> Self {
        LibraryItem::Magazine(magazine)
    }
}

impl From<Newspaper> for LibraryItem {
    fn from(newspaper: Newspaper) -> Self {
        LibraryItem::Newspaper(newspaper)
    }
}
