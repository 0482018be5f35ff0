//! Driving ports for the book inventory.
//!
//! HTTP handlers call [`BookInventoryQuery`] to render the list view and
//! [`BookInventoryCommand`] to mutate records. Session handling stays in the
//! adapter: the query receives the pending-update marker as a plain value,
//! and the command reports a stash so the adapter can persist it.

use async_trait::async_trait;

use crate::domain::{Book, BookDetails, BookId, Error};

/// Everything the list view renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryPage {
    /// Every stored book, in store order.
    pub books: Vec<Book>,
    /// The record pending edit, when the session marker resolved to one.
    pub editing: Option<Book>,
}

/// A two-phase update, selected by the shape of the submitted form.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateRequest {
    /// Remember which record is being edited; no record changes.
    Stash { target_id: BookId },
    /// Overwrite the target record with new attribute values.
    Commit {
        target_id: BookId,
        details: BookDetails,
    },
}

/// Result of an [`UpdateRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The caller must remember `BookId` as the pending-update marker.
    Stashed(BookId),
    /// The record now holds the submitted values.
    Committed(Book),
}

/// Read side of the inventory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookInventoryQuery: Send + Sync {
    /// List every book and resolve the optional pending-edit marker.
    ///
    /// A marker that no longer names a stored book is ignored.
    async fn inventory(&self, pending: Option<BookId>) -> Result<InventoryPage, Error>;
}

/// Write side of the inventory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookInventoryCommand: Send + Sync {
    /// Store a new book.
    async fn insert(&self, book: Book) -> Result<(), Error>;

    /// Remove an existing book; fails with `NotFound` for unknown ids.
    async fn delete(&self, id: BookId) -> Result<(), Error>;

    /// Run either phase of the two-phase update.
    async fn update(&self, request: UpdateRequest) -> Result<UpdateOutcome, Error>;
}
