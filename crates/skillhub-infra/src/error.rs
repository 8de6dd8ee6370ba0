//! sqlx error classification shared by both store backends.

use skillhub_types::error::RepositoryError;

/// Classify a failed sqlx call. Pool and transport failures are connection
/// errors; everything else the database rejected is a query error.
pub(crate) fn query_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::Connection(e.to_string())
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_failures_are_connection_errors() {
        assert!(matches!(
            query_error(sqlx::Error::PoolTimedOut),
            RepositoryError::Connection(_)
        ));
        assert!(matches!(
            query_error(sqlx::Error::PoolClosed),
            RepositoryError::Connection(_)
        ));
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        assert!(matches!(query_error(sqlx::Error::Io(io)), RepositoryError::Connection(_)));
    }

    #[test]
    fn test_other_failures_are_query_errors() {
        assert!(matches!(
            query_error(sqlx::Error::RowNotFound),
            RepositoryError::Query(_)
        ));
        assert!(matches!(
            query_error(sqlx::Error::ColumnNotFound("levels".to_string())),
            RepositoryError::Query(_)
        ));
    }
}
