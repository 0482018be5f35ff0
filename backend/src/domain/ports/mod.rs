//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod book_inventory;
mod book_repository;

#[cfg(test)]
pub use book_inventory::{MockBookInventoryCommand, MockBookInventoryQuery};
pub use book_inventory::{
    BookInventoryCommand, BookInventoryQuery, InventoryPage, UpdateOutcome, UpdateRequest,
};
#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BookRepository, BookRepositoryError};
