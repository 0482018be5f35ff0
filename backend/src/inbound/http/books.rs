//! Book inventory HTTP handlers.
//!
//! ```text
//! GET  /          list view, consuming the pending-update marker
//! POST /insert/   create a book
//! POST /delete/   remove a book
//! POST /update/   stash an edit target or commit new values
//! ```
//!
//! Every successful mutation answers `302 Found` pointing back at `/`.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, post, web};

use crate::domain::ports::{UpdateOutcome, UpdateRequest};
use crate::domain::{Book, BookId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::forms::{DeleteBookForm, InsertBookForm, UpdateBookForm};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::render_inventory;

fn redirect_to_index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// Form extractor settings: undecodable bodies become `400` error pages.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("malformed form body: {err}")).into()
    })
}

/// Register the book routes and their extractor settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .service(list_books)
        .service(insert_book)
        .service(delete_book)
        .service(update_book);
}

/// Render every book, plus the edit form for a stashed target.
#[utoipa::path(
    get,
    path = "/",
    description = "List all books. Consumes the session's pending-update marker.",
    responses(
        (status = 200, description = "Inventory page", content_type = "text/html", body = String),
        (status = 503, description = "Record store unavailable")
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/")]
pub async fn list_books(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let pending = session.take_pending_update();
    let page = state.inventory.inventory(pending).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_inventory(&page)))
}

/// Create a book from the five submitted fields.
#[utoipa::path(
    post,
    path = "/insert/",
    request_body(content = InsertBookForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Created; redirects to the list view"),
        (status = 400, description = "Missing or malformed field"),
        (status = 409, description = "A book with this id already exists")
    ),
    tags = ["books"],
    operation_id = "insertBook"
)]
#[post("/insert/")]
pub async fn insert_book(
    state: web::Data<HttpState>,
    form: web::Form<InsertBookForm>,
) -> ApiResult<HttpResponse> {
    let book = Book::try_from(form.into_inner())?;
    state.books.insert(book).await?;
    Ok(redirect_to_index())
}

/// Remove the book named by `book_id`.
#[utoipa::path(
    post,
    path = "/delete/",
    request_body(content = DeleteBookForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Deleted; redirects to the list view"),
        (status = 400, description = "Missing or malformed book_id"),
        (status = 404, description = "No book with this id")
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[post("/delete/")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    form: web::Form<DeleteBookForm>,
) -> ApiResult<HttpResponse> {
    let id = BookId::try_from(form.into_inner())?;
    state.books.delete(id).await?;
    Ok(redirect_to_index())
}

/// Two-phase update.
///
/// Without `book_id` the request stashes `book_id_update` in the session for
/// the next list render. With `book_id` it overwrites that book's attributes.
#[utoipa::path(
    post,
    path = "/update/",
    request_body(content = UpdateBookForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Stashed or committed; redirects to the list view"),
        (status = 400, description = "Missing or malformed field"),
        (status = 404, description = "No book with this id")
    ),
    tags = ["books"],
    operation_id = "updateBook"
)]
#[post("/update/")]
pub async fn update_book(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<UpdateBookForm>,
) -> ApiResult<HttpResponse> {
    let request = UpdateRequest::try_from(form.into_inner())?;
    if let UpdateOutcome::Stashed(id) = state.books.update(request).await? {
        session.stash_pending_update(id)?;
    }
    Ok(redirect_to_index())
}
