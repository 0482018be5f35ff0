//! Domain primitives, ports and services.
//!
//! Purpose: keep the inventory rules independent of HTTP and storage. Inbound
//! adapters drive the [`ports::BookInventoryQuery`] and
//! [`ports::BookInventoryCommand`] ports; outbound adapters implement
//! [`ports::BookRepository`].
//!
//! Public surface:
//! - Book, BookDetails, BookId: the record model.
//! - Error, ErrorCode: transport-agnostic failures.
//! - TraceId: per-request correlation identifier.
//! - BookInventoryService: the use-case implementation.

pub mod book;
pub mod error;
pub mod inventory_service;
pub mod ports;
pub mod trace_id;

pub use self::book::{Book, BookDetails, BookId};
pub use self::error::{Error, ErrorCode};
pub use self::inventory_service::BookInventoryService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for inventory operations.
///
/// # Examples
/// ```
/// use bookstore::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("book 1 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
