//! Driven port for the book record store.
//!
//! Adapters live under `outbound::persistence`; the domain only sees this
//! trait and its error type.

use async_trait::async_trait;

use crate::domain::{Book, BookDetails, BookId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by record store adapters.
    pub enum BookRepositoryError {
        /// No record is stored under the identifier.
        NotFound { book_id: i64 } => "book {book_id} not found",
        /// A record with the identifier already exists.
        DuplicateKey { book_id: i64 } => "book {book_id} already exists",
        /// The store could not be reached.
        Connection { message: String } => "book repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "book repository query failed: {message}",
    }
}

/// Persistence operations keyed by [`BookId`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Persist a new record, failing with `DuplicateKey` if the key is taken.
    async fn create(&self, book: &Book) -> Result<BookId, BookRepositoryError>;

    /// Fetch the record stored under `id`.
    async fn get(&self, id: BookId) -> Result<Book, BookRepositoryError>;

    /// Overwrite the attributes of an existing record.
    async fn update(&self, id: BookId, details: &BookDetails) -> Result<(), BookRepositoryError>;

    /// Remove the record stored under `id`.
    async fn delete(&self, id: BookId) -> Result<(), BookRepositoryError>;

    /// Every record, in ascending key order.
    async fn list(&self) -> Result<Vec<Book>, BookRepositoryError>;
}
