//! Book inventory service implementing the driving ports.
//!
//! Every operation performs a single read-modify-write against the record
//! store; store failures are translated into domain errors and propagate
//! unchanged to the caller. The only swallowed failure is a pending-edit
//! marker that no longer resolves.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    BookInventoryCommand, BookInventoryQuery, BookRepository, BookRepositoryError, InventoryPage,
    UpdateOutcome, UpdateRequest,
};
use crate::domain::{Book, BookId, Error};

/// Inventory use-cases backed by a [`BookRepository`].
#[derive(Clone)]
pub struct BookInventoryService<R> {
    books: Arc<R>,
}

impl<R> BookInventoryService<R> {
    /// Create a service over the given record store.
    pub fn new(books: Arc<R>) -> Self {
        Self { books }
    }
}

/// Translate record store failures into domain errors.
pub(crate) fn map_repository_error(error: BookRepositoryError) -> Error {
    match error {
        BookRepositoryError::NotFound { book_id } => Error::not_found(format!(
            "book {book_id} not found"
        ))
        .with_details(json!({ "bookId": book_id, "code": "book_not_found" })),
        BookRepositoryError::DuplicateKey { book_id } => Error::conflict(format!(
            "book {book_id} already exists"
        ))
        .with_details(json!({ "bookId": book_id, "code": "duplicate_book_id" })),
        BookRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("book repository unavailable: {message}"))
        }
        BookRepositoryError::Query { message } => {
            Error::internal(format!("book repository error: {message}"))
        }
    }
}

impl<R> BookInventoryService<R>
where
    R: BookRepository,
{
    async fn resolve_pending(&self, pending: Option<BookId>) -> Option<Book> {
        let id = pending?;
        match self.books.get(id).await {
            Ok(book) => Some(book),
            Err(error) => {
                warn!(book_id = %id, %error, "pending update marker did not resolve; ignoring");
                None
            }
        }
    }
}

#[async_trait]
impl<R> BookInventoryQuery for BookInventoryService<R>
where
    R: BookRepository,
{
    async fn inventory(&self, pending: Option<BookId>) -> Result<InventoryPage, Error> {
        let books = self.books.list().await.map_err(map_repository_error)?;
        let editing = self.resolve_pending(pending).await;
        Ok(InventoryPage { books, editing })
    }
}

#[async_trait]
impl<R> BookInventoryCommand for BookInventoryService<R>
where
    R: BookRepository,
{
    async fn insert(&self, book: Book) -> Result<(), Error> {
        let id = self
            .books
            .create(&book)
            .await
            .map_err(map_repository_error)?;
        info!(book_id = %id, "book inserted");
        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<(), Error> {
        let book = self.books.get(id).await.map_err(map_repository_error)?;
        self.books
            .delete(book.id())
            .await
            .map_err(map_repository_error)?;
        info!(book_id = %id, "book deleted");
        Ok(())
    }

    async fn update(&self, request: UpdateRequest) -> Result<UpdateOutcome, Error> {
        match request {
            UpdateRequest::Stash { target_id } => {
                info!(book_id = %target_id, "update target stashed for editing");
                Ok(UpdateOutcome::Stashed(target_id))
            }
            UpdateRequest::Commit { target_id, details } => {
                let mut book = self
                    .books
                    .get(target_id)
                    .await
                    .map_err(map_repository_error)?;
                book.overwrite(details);
                self.books
                    .update(book.id(), book.details())
                    .await
                    .map_err(map_repository_error)?;
                info!(book_id = %target_id, "book updated");
                Ok(UpdateOutcome::Committed(book))
            }
        }
    }
}
