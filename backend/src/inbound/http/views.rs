//! HTML rendering for the inventory page and error pages.
//!
//! Pages are assembled from `format!` fragments pushed onto a `String`.
//! Every value that
//! originates from a record or an error is passed through [`escape_html`].

use actix_web::http::StatusCode;

use crate::domain::ports::InventoryPage;
use crate::domain::{Book, Error};

/// Escape text for use inside element content and quoted attributes.
///
/// # Examples
/// ```
/// use bookstore::inbound::http::views::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">&"#), "&lt;a href=&quot;x&quot;&gt;&amp;");
/// ```
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape_html(title),
    )
}

fn text_input(out: &mut String, name: &str, value: &str) {
    out.push_str(&format!(
        "<label>{name} <input type=\"text\" name=\"{name}\" value=\"{value}\"></label>\n",
        value = escape_html(value),
    ));
}

fn book_row(out: &mut String, book: &Book) {
    let id = book.id();
    let details = book.details();
    out.push_str(&format!(
        "<tr><td>{id}</td><td>{isbn}</td><td>{name}</td><td>{price}</td><td>{author}</td>\
         <td><form method=\"post\" action=\"/update/\">\
         <input type=\"hidden\" name=\"book_id_update\" value=\"{id}\">\
         <button type=\"submit\">Edit</button></form></td>\
         <td><form method=\"post\" action=\"/delete/\">\
         <input type=\"hidden\" name=\"book_id\" value=\"{id}\">\
         <button type=\"submit\">Delete</button></form></td></tr>\n",
        isbn = escape_html(&details.isbn),
        name = escape_html(&details.book_name),
        price = details.price,
        author = escape_html(&details.author),
    ));
}

fn insert_form(out: &mut String) {
    out.push_str("<h2>Add a book</h2>\n<form method=\"post\" action=\"/insert/\">\n");
    for field in ["book_id", "isbn", "book_name", "price", "author"] {
        text_input(out, field, "");
    }
    out.push_str("<button type=\"submit\">Insert</button>\n</form>\n");
}

fn edit_form(out: &mut String, book: &Book) {
    let details = book.details();
    out.push_str(&format!(
        "<h2 id=\"editing\">Editing book {id}</h2>\n<form method=\"post\" action=\"/update/\">\n\
         <input type=\"hidden\" name=\"book_id\" value=\"{id}\">\n",
        id = book.id(),
    ));
    text_input(out, "isbn", &details.isbn);
    text_input(out, "book_name", &details.book_name);
    text_input(out, "price", &details.price.to_string());
    text_input(out, "author", &details.author);
    out.push_str("<button type=\"submit\">Save</button>\n</form>\n");
}

/// Render the list view: the book table, the pending edit form if any, and
/// the insert form.
pub fn render_inventory(inventory: &InventoryPage) -> String {
    let mut body = String::from("<h1>Books</h1>\n");
    if inventory.books.is_empty() {
        body.push_str("<p>No books yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>ID</th><th>ISBN</th><th>Name</th><th>Price</th><th>Author</th>\
             <th></th><th></th></tr>\n",
        );
        for book in &inventory.books {
            book_row(&mut body, book);
        }
        body.push_str("</table>\n");
    }
    if let Some(book) = &inventory.editing {
        edit_form(&mut body, book);
    }
    insert_form(&mut body);
    page("Books", &body)
}

/// Render an error page for a failed request.
pub fn render_error(status: StatusCode, error: &Error) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let mut body = format!(
        "<h1>{code} {reason}</h1>\n<p>{message}</p>\n",
        code = status.as_u16(),
        message = escape_html(error.message()),
    );
    if let Some(id) = error.trace_id() {
        body.push_str(&format!(
            "<p><small>Trace: {}</small></p>\n",
            escape_html(id)
        ));
    }
    body.push_str("<p><a href=\"/\">Back to the inventory</a></p>\n");
    page(reason, &body)
}
