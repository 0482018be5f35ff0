//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: record stores for books, either PostgreSQL-backed via
//!   Diesel or held in process memory.
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic.

pub mod persistence;
