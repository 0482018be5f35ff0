//! HTTP inbound adapter serving the book inventory pages.

pub mod books;
pub mod error;
pub mod forms;
pub mod health;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;
pub mod views;

pub use error::ApiResult;
