//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates the book routes, their form bodies and the health
//! probes. Swagger UI serves it in debug builds and the `openapi-dump`
//! binary prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::forms::{DeleteBookForm, InsertBookForm, UpdateBookForm};

/// OpenAPI document for the HTTP interface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore inventory",
        description = "HTML form interface for listing, inserting, updating and deleting books."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::insert_book,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::books::update_book,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(InsertBookForm, DeleteBookForm, UpdateBookForm)),
    tags(
        (name = "books", description = "Book inventory pages and form posts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
