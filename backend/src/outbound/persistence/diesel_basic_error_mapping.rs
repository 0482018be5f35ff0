//! Diesel and pool error translation into [`BookRepositoryError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::BookId;
use crate::domain::ports::BookRepositoryError;

use super::pool::PoolError;

/// Every pool failure means the store is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> BookRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    BookRepositoryError::connection(message)
}

/// Map a failed read or mutation.
pub(crate) fn map_diesel_error(error: DieselError) -> BookRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::QueryBuilderError(_) => BookRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            BookRepositoryError::connection("database connection error")
        }
        _ => BookRepositoryError::query("database error"),
    }
}

/// Map a failed insert, where a primary key collision is a duplicate.
pub(crate) fn map_insert_error(error: DieselError, id: BookId) -> BookRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            debug!(book_id = %id, "insert rejected by primary key");
            BookRepositoryError::duplicate_key(id.get())
        }
        other => map_diesel_error(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(String::from("boom")))
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, BookRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn closed_connections_are_connection_errors() {
        let mapped = map_diesel_error(database_error(DatabaseErrorKind::ClosedConnection));
        assert!(matches!(mapped, BookRepositoryError::Connection { .. }));
    }

    #[rstest]
    #[case(database_error(DatabaseErrorKind::CheckViolation))]
    #[case(DieselError::NotFound)]
    fn other_failures_are_query_errors(#[case] error: DieselError) {
        assert!(matches!(
            map_diesel_error(error),
            BookRepositoryError::Query { .. }
        ));
    }

    #[rstest]
    fn unique_violation_on_insert_is_a_duplicate() {
        let mapped = map_insert_error(
            database_error(DatabaseErrorKind::UniqueViolation),
            BookId::new(7),
        );
        assert_eq!(mapped, BookRepositoryError::duplicate_key(7));
    }

    #[rstest]
    fn unique_violation_elsewhere_is_a_query_error() {
        let mapped = map_diesel_error(database_error(DatabaseErrorKind::UniqueViolation));
        assert!(matches!(mapped, BookRepositoryError::Query { .. }));
    }
}
