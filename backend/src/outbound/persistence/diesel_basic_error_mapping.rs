//! Shared Diesel error mapping for repository adapters.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Constructors for the repository error a Diesel failure maps onto.
pub struct DieselErrorMapping<Q, C, U> {
    /// Query faults.
    pub query: Q,
    /// Lost or unusable connections.
    pub connection: C,
    /// Unique constraint violations; receives the constraint name.
    pub unique: U,
}

/// Map common Diesel error variants onto repository errors.
///
/// The database message is logged at debug level and never forwarded.
pub fn map_basic_diesel_error<E, Q, C, U>(
    error: diesel::result::Error,
    mapping: DieselErrorMapping<Q, C, U>,
) -> E
where
    Q: FnOnce(&'static str) -> E,
    C: FnOnce(&'static str) -> E,
    U: FnOnce(String) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => (mapping.query)("record not found"),
        DieselError::QueryBuilderError(_) => (mapping.query)("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            (mapping.connection)("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            (mapping.unique)(info.constraint_name().unwrap_or("unique").to_owned())
        }
        _ => (mapping.query)("database error"),
    }
}

#[cfg(test)]
mod tests {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(&'static str),
        Connection(&'static str),
        Unique(String),
    }

    fn map(error: DieselError) -> Mapped {
        map_basic_diesel_error(
            error,
            DieselErrorMapping {
                query: Mapped::Query,
                connection: Mapped::Connection,
                unique: Mapped::Unique,
            },
        )
    }

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new("simulated".to_owned()))
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        assert_eq!(map(DieselError::NotFound), Mapped::Query("record not found"));
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        assert_eq!(
            map(database_error(DatabaseErrorKind::ClosedConnection)),
            Mapped::Connection("database connection error")
        );
    }

    #[rstest]
    fn unique_violation_is_a_conflict() {
        assert_eq!(
            map(database_error(DatabaseErrorKind::UniqueViolation)),
            Mapped::Unique("unique".to_owned())
        );
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped: String =
            map_basic_pool_error(PoolError::checkout("timed out"), |message| message);
        assert_eq!(mapped, "timed out");
    }
}
