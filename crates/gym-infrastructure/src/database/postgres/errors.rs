//! Mapping from `sqlx::Error` to `StoreError`

use gym_core::StoreError;
use sqlx::error::ErrorKind;
use tracing::debug;

/// Classifies a driver error by SQLSTATE kind, keeping the constraint name.
pub(crate) fn map_db_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::Database(db) => {
            let constraint = db.constraint().unwrap_or_default().to_string();
            match db.kind() {
                ErrorKind::UniqueViolation => StoreError::UniqueViolation { constraint },
                ErrorKind::CheckViolation => StoreError::CheckViolation { constraint },
                ErrorKind::ForeignKeyViolation => StoreError::MissingReference { constraint },
                _ => StoreError::database(sqlx::Error::Database(db)),
            }
        }
        other => StoreError::database(other),
    }
}

/// `map_db_error` plus a debug line naming the failed operation. The request
/// middleware owns the error-level log.
pub(crate) fn store_error(operation: &'static str) -> impl Fn(sqlx::Error) -> StoreError {
    move |e| {
        debug!(operation, error = %e, "Database operation failed");
        map_db_error(e)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    use sqlx::error::DatabaseError;

    use super::*;

    #[derive(Debug)]
    struct FakeDbError {
        kind: ErrorKind,
        constraint: Option<&'static str>,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "fake database error")
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "fake database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            None
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn kind(&self) -> ErrorKind {
            match self.kind {
                ErrorKind::UniqueViolation => ErrorKind::UniqueViolation,
                ErrorKind::ForeignKeyViolation => ErrorKind::ForeignKeyViolation,
                ErrorKind::NotNullViolation => ErrorKind::NotNullViolation,
                ErrorKind::CheckViolation => ErrorKind::CheckViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn db_error(kind: ErrorKind, constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { kind, constraint }))
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        assert!(matches!(map_db_error(sqlx::Error::RowNotFound), StoreError::NotFound));
    }

    #[test]
    fn test_constraint_kinds_keep_constraint_name() {
        let err = map_db_error(db_error(ErrorKind::UniqueViolation, Some("users_email_key")));
        assert!(matches!(&err, StoreError::UniqueViolation { constraint } if constraint == "users_email_key"));

        let err = map_db_error(db_error(ErrorKind::CheckViolation, Some("users_role_check")));
        assert!(matches!(&err, StoreError::CheckViolation { constraint } if constraint == "users_role_check"));

        let err = map_db_error(db_error(ErrorKind::ForeignKeyViolation, Some("users_tenant_id_fkey")));
        assert!(err.is_not_found());
        assert_eq!(err.constraint(), Some("users_tenant_id_fkey"));
    }

    #[test]
    fn test_other_errors_map_to_database() {
        let err = map_db_error(db_error(ErrorKind::NotNullViolation, None));
        assert!(matches!(err, StoreError::Database(_)));

        let err = map_db_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Database(_)));
    }
}
