//! Internal Diesel row structs. Never exposed to the domain.

use diesel::prelude::*;

use crate::domain::{Book, BookDetails, BookId};

use super::schema::books;

/// Row read from the books table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub book_id: i64,
    pub isbn: String,
    pub book_name: String,
    pub price: f64,
    pub author: String,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self::new(
            BookId::new(row.book_id),
            BookDetails {
                isbn: row.isbn,
                book_name: row.book_name,
                price: row.price,
                author: row.author,
            },
        )
    }
}

/// Insertable book record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub(crate) struct NewBookRow<'a> {
    pub book_id: i64,
    pub isbn: &'a str,
    pub book_name: &'a str,
    pub price: f64,
    pub author: &'a str,
}

impl<'a> From<&'a Book> for NewBookRow<'a> {
    fn from(book: &'a Book) -> Self {
        let details = book.details();
        Self {
            book_id: book.id().get(),
            isbn: &details.isbn,
            book_name: &details.book_name,
            price: details.price,
            author: &details.author,
        }
    }
}

/// Every mutable column, written together on update.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = books)]
pub(crate) struct BookChangeset<'a> {
    pub isbn: &'a str,
    pub book_name: &'a str,
    pub price: f64,
    pub author: &'a str,
}

impl<'a> From<&'a BookDetails> for BookChangeset<'a> {
    fn from(details: &'a BookDetails) -> Self {
        Self {
            isbn: &details.isbn,
            book_name: &details.book_name,
            price: details.price,
            author: &details.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn row_converts_to_book() {
        let book = Book::from(BookRow {
            book_id: 3,
            isbn: "X".into(),
            book_name: "N".into(),
            price: 2.5,
            author: "A".into(),
        });
        assert_eq!(book.id(), BookId::new(3));
        assert_eq!(book.details().price, 2.5);
    }

    #[rstest]
    fn changeset_borrows_every_attribute() {
        let details = BookDetails {
            isbn: "Y".into(),
            book_name: "M".into(),
            price: 1.0,
            author: "B".into(),
        };
        let changes = BookChangeset::from(&details);
        assert_eq!(
            (changes.isbn, changes.book_name, changes.author),
            ("Y", "M", "B")
        );
    }
}
