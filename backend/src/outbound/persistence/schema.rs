//! Diesel table definitions. Must match `migrations/` exactly.

diesel::table! {
    /// Book inventory records.
    books (book_id) {
        /// Caller-supplied primary key.
        book_id -> Int8,
        isbn -> Varchar,
        book_name -> Varchar,
        price -> Float8,
        author -> Varchar,
    }
}
