//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! the inventory ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BookInventoryCommand, BookInventoryQuery};

/// Port implementations used by the book handlers.
#[derive(Clone)]
pub struct HttpState {
    pub inventory: Arc<dyn BookInventoryQuery>,
    pub books: Arc<dyn BookInventoryCommand>,
}

impl HttpState {
    /// Bundle the read and write sides of the inventory.
    pub fn new(inventory: Arc<dyn BookInventoryQuery>, books: Arc<dyn BookInventoryCommand>) -> Self {
        Self { inventory, books }
    }

    /// Use one value for both ports, as with
    /// [`BookInventoryService`](crate::domain::BookInventoryService).
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: BookInventoryQuery + BookInventoryCommand + 'static,
    {
        Self {
            inventory: service.clone(),
            books: service,
        }
    }
}
