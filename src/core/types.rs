//! core::types
//!
//! Strong types for catalog item fields.
//!
//! # Types
//!
//! - [`Title`] - Non-blank item title
//! - [`Publisher`] - Non-blank publisher name
//! - [`Author`] - Non-blank book author
//! - [`Editor`] - Non-blank newspaper editor
//! - [`PublicationYear`] - Year between 1 and the current calendar year
//! - [`IssueNumber`] - Magazine issue number, strictly positive
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs: an item
//! holding an empty title or a future publication year cannot exist
//! anywhere in the program, including in deserialized catalog files.
//!
//! # Examples
//!
//! ```
//! use shelfmark::core::types::{IssueNumber, PublicationYear, Title};
//!
//! // Valid constructions
//! let title = Title::new("Dune").unwrap();
//! let year = PublicationYear::new(1965).unwrap();
//! let issue = IssueNumber::new(42).unwrap();
//!
//! // Invalid constructions fail at creation time
//! assert!(Title::new("   ").is_err());
//! assert!(PublicationYear::new(0).is_err());
//! assert!(IssueNumber::new(0).is_err());
//! ```

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from item field validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("invalid title: {0}")]
    InvalidTitle(String),

    #[error("invalid publisher: {0}")]
    InvalidPublisher(String),

    #[error("invalid author: {0}")]
    InvalidAuthor(String),

    #[error("invalid editor: {0}")]
    InvalidEditor(String),

    #[error("invalid publication year: {0}")]
    InvalidPublicationYear(String),

    #[error("invalid issue number: {0}")]
    InvalidIssueNumber(String),
}

/// The current calendar year per the system clock.
///
/// Recomputed at every validation; publication years are checked against
/// the wall clock, not a cached value.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// True when the string is empty or all whitespace.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A validated item title.
///
/// Titles must be non-empty after trimming whitespace. The original
/// (untrimmed) value is preserved.
///
/// # Example
///
/// ```
/// use shelfmark::core::types::Title;
///
/// let title = Title::new("The Left Hand of Darkness").unwrap();
/// assert_eq!(title.as_str(), "The Left Hand of Darkness");
///
/// assert!(Title::new("").is_err());
/// assert!(Title::new(" \t ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Create a new validated title.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::InvalidTitle` if the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ItemError> {
        let value = value.into();
        if is_blank(&value) {
            return Err(ItemError::InvalidTitle("Title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A validated publisher name.
///
/// Must be non-empty after trimming whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Publisher(String);

impl Publisher {
    /// Create a new validated publisher name.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::InvalidPublisher` if the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ItemError> {
        let value = value.into();
        if is_blank(&value) {
            return Err(ItemError::InvalidPublisher(
                "Publisher cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the publisher as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A validated book author name.
///
/// Must be non-empty after trimming whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Author(String);

impl Author {
    /// Create a new validated author name.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::InvalidAuthor` if the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ItemError> {
        let value = value.into();
        if is_blank(&value) {
            return Err(ItemError::InvalidAuthor("Author cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Get the author as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A validated newspaper editor name.
///
/// Must be non-empty after trimming whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Editor(String);

impl Editor {
    /// Create a new validated editor name.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::InvalidEditor` if the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ItemError> {
        let value = value.into();
        if is_blank(&value) {
            return Err(ItemError::InvalidEditor("Editor cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Get the editor as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A validated publication year.
///
/// Must be between 1 and the current calendar year, inclusive. The upper
/// bound is recomputed against the system clock at every validation, so a
/// year that is valid today stays valid tomorrow but never the other way
/// around.
///
/// # Example
///
/// ```
/// use shelfmark::core::types::{current_year, PublicationYear};
///
/// let year = PublicationYear::new(1965).unwrap();
/// assert_eq!(year.value(), 1965);
///
/// assert!(PublicationYear::new(current_year()).is_ok());
/// assert!(PublicationYear::new(current_year() + 1).is_err());
/// assert!(PublicationYear::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PublicationYear(i32);

impl PublicationYear {
    /// Create a new validated publication year.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::InvalidPublicationYear` if the year is not in
    /// `1..=current_year()`.
    pub fn new(year: i32) -> Result<Self, ItemError> {
        let current = current_year();
        if year <= 0 || year > current {
            return Err(ItemError::InvalidPublicationYear(format!(
                "PublicationYear must be between 1 and {current}"
            )));
        }
        Ok(Self(year))
    }

    /// Get the year value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for PublicationYear {
    type Error = ItemError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        Self::new(year)
    }
}

impl From<PublicationYear> for i32 {
    fn from(year: PublicationYear) -> Self {
        year.0
    }
}

impl std::fmt::Display for PublicationYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated magazine issue number.
///
/// Must be strictly positive. Negative values are unrepresentable at the
/// type level (`u32`); zero is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct IssueNumber(u32);

impl IssueNumber {
    /// Create a new validated issue number.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::InvalidIssueNumber` if the value is zero.
    pub fn new(value: u32) -> Result<Self, ItemError> {
        if value == 0 {
            return Err(ItemError::InvalidIssueNumber(
                "IssueNumber must be greater than 0".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the issue number value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for IssueNumber {
    type Error = ItemError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IssueNumber> for u32 {
    fn from(value: IssueNumber) -> Self {
        value.0
    }
}

impl std::fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! string_newtype_conversions {
    ($($name:ident),+) => {
        $(
            impl TryFrom<String> for $name {
                type Error = ItemError;

                fn try_from(s: String) -> Result<Self, Self::Error> {
                    Self::new(s)
                }
            }

            impl From<$name> for String {
                fn from(value: $name) -> Self {
                    value.0
                }
            }

            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )+
    };
}

string_newtype_conversions!(Title, Publisher, Author, Editor);
