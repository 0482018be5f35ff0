//! PostgreSQL-backed `BookRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BookRepository, BookRepositoryError};
use crate::domain::{Book, BookDetails, BookId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_insert_error, map_pool_error};
use super::models::{BookChangeset, BookRow, NewBookRow};
use super::pool::DbPool;
use super::schema::books;

/// Diesel-backed record store.
///
/// Each operation checks out one connection and runs a single statement, so
/// concurrent writers are serialised by PostgreSQL rather than by the
/// adapter.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn create(&self, book: &Book) -> Result<BookId, BookRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(books::table)
            .values(&NewBookRow::from(book))
            .execute(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, book.id()))?;

        Ok(book.id())
    }

    async fn get(&self, id: BookId) -> Result<Book, BookRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BookRow> = books::table
            .find(id.get())
            .select(BookRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(Book::from)
            .ok_or_else(|| BookRepositoryError::not_found(id.get()))
    }

    async fn update(&self, id: BookId, details: &BookDetails) -> Result<(), BookRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(books::table.find(id.get()))
            .set(&BookChangeset::from(details))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if affected == 0 {
            return Err(BookRepositoryError::not_found(id.get()));
        }
        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<(), BookRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(books::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if affected == 0 {
            return Err(BookRepositoryError::not_found(id.get()));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Book>, BookRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BookRow> = books::table
            .order(books::book_id.asc())
            .select(BookRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Book::from).collect())
    }
}
