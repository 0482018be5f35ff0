//! Book records held by the inventory.
//!
//! A [`Book`] is keyed by an externally supplied [`BookId`]; the remaining
//! attributes live in [`BookDetails`] so updates can replace them wholesale
//! while the key stays fixed.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier of a book, chosen by whoever inserts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for BookId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<BookId> for i64 {
    fn from(value: BookId) -> Self {
        value.0
    }
}

impl FromStr for BookId {
    type Err = ParseIntError;

    /// Parse a base-10 identifier, tolerating surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Mutable attributes of a book.
///
/// No uniqueness is enforced on `isbn`, and `price` is stored exactly as
/// provided without currency or rounding semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetails {
    pub isbn: String,
    pub book_name: String,
    pub price: f64,
    pub author: String,
}

/// A book record.
///
/// # Examples
/// ```
/// use bookstore::domain::{Book, BookDetails, BookId};
///
/// let book = Book::new(
///     BookId::new(1),
///     BookDetails {
///         isbn: "978-0131103627".into(),
///         book_name: "The C Programming Language".into(),
///         price: 45.5,
///         author: "Kernighan".into(),
///     },
/// );
/// assert_eq!(book.id(), BookId::new(1));
/// assert_eq!(book.details().author, "Kernighan");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    details: BookDetails,
}

impl Book {
    /// Assemble a book from its key and attributes.
    #[must_use]
    pub fn new(id: BookId, details: BookDetails) -> Self {
        Self { id, details }
    }

    /// Primary key.
    #[must_use]
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Current attributes.
    #[must_use]
    pub fn details(&self) -> &BookDetails {
        &self.details
    }

    /// Replace every attribute, keeping the key.
    pub fn overwrite(&mut self, details: BookDetails) {
        self.details = details;
    }

    /// Split into key and attributes.
    #[must_use]
    pub fn into_parts(self) -> (BookId, BookDetails) {
        (self.id, self.details)
    }
}
