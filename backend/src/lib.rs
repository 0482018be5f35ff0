//! Book inventory web application.
//!
//! The domain layer owns books and the inventory service; inbound adapters
//! expose it as HTML pages and form posts; outbound adapters persist books in
//! memory or in PostgreSQL.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
