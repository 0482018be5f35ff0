//! Form-encoded payloads accepted by the book handlers.
//!
//! Every field is optional at the serde level so absence can be reported as
//! a `missing_field` validation error instead of a generic decode failure.
//! Presence checks run before value parsing, so a request that is both
//! incomplete and malformed is reported as incomplete.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::ports::UpdateRequest;
use crate::domain::{Book, BookDetails, BookId, Error};

use super::validation::{
    AUTHOR, BOOK_ID, BOOK_ID_UPDATE, BOOK_NAME, ISBN, PRICE, parse_book_id, parse_price, require,
};

/// Body of `POST /insert/`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct InsertBookForm {
    pub book_id: Option<String>,
    pub isbn: Option<String>,
    pub book_name: Option<String>,
    pub price: Option<String>,
    pub author: Option<String>,
}

/// Body of `POST /delete/`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DeleteBookForm {
    pub book_id: Option<String>,
}

/// Body of `POST /update/`.
///
/// With `book_id` the request commits new values to that book; without it,
/// `book_id_update` names the book to stash for editing.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBookForm {
    pub book_id_update: Option<String>,
    pub book_id: Option<String>,
    pub isbn: Option<String>,
    pub book_name: Option<String>,
    pub price: Option<String>,
    pub author: Option<String>,
}

struct DetailFields {
    isbn: Option<String>,
    book_name: Option<String>,
    price: Option<String>,
    author: Option<String>,
}

impl DetailFields {
    fn into_details(self) -> Result<BookDetails, Error> {
        let isbn = require(self.isbn, ISBN)?;
        let book_name = require(self.book_name, BOOK_NAME)?;
        let price = require(self.price, PRICE)?;
        let author = require(self.author, AUTHOR)?;
        Ok(BookDetails {
            isbn,
            book_name,
            price: parse_price(&price, PRICE)?,
            author,
        })
    }
}

impl TryFrom<InsertBookForm> for Book {
    type Error = Error;

    fn try_from(form: InsertBookForm) -> Result<Self, Self::Error> {
        let raw_id = require(form.book_id, BOOK_ID)?;
        let details = DetailFields {
            isbn: form.isbn,
            book_name: form.book_name,
            price: form.price,
            author: form.author,
        }
        .into_details()?;
        Ok(Self::new(parse_book_id(&raw_id, BOOK_ID)?, details))
    }
}

impl TryFrom<DeleteBookForm> for BookId {
    type Error = Error;

    fn try_from(form: DeleteBookForm) -> Result<Self, Self::Error> {
        let raw_id = require(form.book_id, BOOK_ID)?;
        parse_book_id(&raw_id, BOOK_ID)
    }
}

impl TryFrom<UpdateBookForm> for UpdateRequest {
    type Error = Error;

    fn try_from(form: UpdateBookForm) -> Result<Self, Self::Error> {
        let Some(raw_id) = form.book_id else {
            let raw_target = require(form.book_id_update, BOOK_ID_UPDATE)?;
            return Ok(Self::Stash {
                target_id: parse_book_id(&raw_target, BOOK_ID_UPDATE)?,
            });
        };

        let details = DetailFields {
            isbn: form.isbn,
            book_name: form.book_name,
            price: form.price,
            author: form.author,
        }
        .into_details()?;
        Ok(Self::Commit {
            target_id: parse_book_id(&raw_id, BOOK_ID)?,
            details,
        })
    }
}
