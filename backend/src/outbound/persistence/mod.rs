//! Record store adapters.
//!
//! - [`DieselBookRepository`] persists books in PostgreSQL through
//!   `diesel-async` with `bb8` pooling. Schema changes ship as embedded
//!   migrations applied by [`run_pending_migrations`].
//! - [`InMemoryBookRepository`] keeps books in process memory; it is the
//!   default when no database URL is configured.
//!
//! Diesel row structs and table definitions are internal and never reach the
//! domain.
//!
//! # Example
//!
//! ```ignore
//! use bookstore::outbound::persistence::{DbPool, DieselBookRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/bookstore")).await?;
//! let repo = DieselBookRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_book_repository;
mod in_memory_book_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_book_repository::DieselBookRepository;
pub use in_memory_book_repository::InMemoryBookRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
