//! Builders for the HTTP state backing the book routes.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use bookstore::domain::BookInventoryService;
use bookstore::domain::ports::BookRepository;
use bookstore::inbound::http::state::HttpState;
use bookstore::outbound::persistence::{DieselBookRepository, InMemoryBookRepository};

use super::ServerConfig;

fn state_for<R>(repository: R) -> HttpState
where
    R: BookRepository + 'static,
{
    HttpState::from_service(Arc::new(BookInventoryService::new(Arc::new(repository))))
}

/// Wire the inventory service to PostgreSQL when a pool is configured,
/// otherwise to a process-local store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "book store selected");
            state_for(DieselBookRepository::new(pool.clone()))
        }
        None => {
            info!(store = "memory", "book store selected");
            state_for(InMemoryBookRepository::new())
        }
    };
    web::Data::new(state)
}
