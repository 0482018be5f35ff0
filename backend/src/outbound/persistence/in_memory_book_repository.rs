//! Process-local `BookRepository` used when no database is configured.
//!
//! Records live in a `BTreeMap` so listing is naturally ordered by key. A
//! single `RwLock` guards the map; every operation takes the lock once, which
//! makes each one atomic with respect to the others.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{BookRepository, BookRepositoryError};
use crate::domain::{Book, BookDetails, BookId};

/// In-memory record store.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<BTreeMap<BookId, BookDetails>>,
}

impl InMemoryBookRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `books`; later entries win on key collisions.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let books = books.into_iter().map(Book::into_parts).collect();
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: &Book) -> Result<BookId, BookRepositoryError> {
        let mut books = self.books.write().await;
        let id = book.id();
        if books.contains_key(&id) {
            return Err(BookRepositoryError::duplicate_key(id.get()));
        }
        books.insert(id, book.details().clone());
        Ok(id)
    }

    async fn get(&self, id: BookId) -> Result<Book, BookRepositoryError> {
        self.books
            .read()
            .await
            .get(&id)
            .map(|details| Book::new(id, details.clone()))
            .ok_or_else(|| BookRepositoryError::not_found(id.get()))
    }

    async fn update(&self, id: BookId, details: &BookDetails) -> Result<(), BookRepositoryError> {
        let mut books = self.books.write().await;
        let slot = books
            .get_mut(&id)
            .ok_or_else(|| BookRepositoryError::not_found(id.get()))?;
        *slot = details.clone();
        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<(), BookRepositoryError> {
        self.books
            .write()
            .await
            .remove(&id)
            .map(drop)
            .ok_or_else(|| BookRepositoryError::not_found(id.get()))
    }

    async fn list(&self) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self
            .books
            .read()
            .await
            .iter()
            .map(|(id, details)| Book::new(*id, details.clone()))
            .collect())
    }
}
