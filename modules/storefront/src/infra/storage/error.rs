//! Database error classification
//!
//! The only place that inspects engine error codes. Everything above the storage
//! layer sees [`StorefrontError`].

use crate::contract::StorefrontError;
use sea_orm::{sqlx, DbErr, RuntimeErr, SqlErr};

// PostgreSQL SQLSTATE / SQLite extended result codes
const PG_UNIQUE: &str = "23505";
const PG_FOREIGN_KEY: &str = "23503";
const PG_NOT_NULL: &str = "23502";
const PG_CHECK: &str = "23514";
const SQLITE_UNIQUE: &str = "2067";
const SQLITE_PRIMARY_KEY: &str = "1555";
const SQLITE_FOREIGN_KEY: &str = "787";
// Deleting a parent that an ON DELETE RESTRICT key still references
const SQLITE_FOREIGN_KEY_RESTRICT: &str = "1811";
const SQLITE_NOT_NULL: &str = "1299";
const SQLITE_CHECK: &str = "275";

/// Map a sea-orm error onto the store taxonomy
pub fn classify(err: DbErr) -> StorefrontError {
    let classified = match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            Some(StorefrontError::UniqueViolation { detail })
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            Some(StorefrontError::ForeignKeyViolation { detail })
        }
        _ => None,
    };

    let classified = classified.or_else(|| {
        let (code, detail) = database_code(&err)?;
        classify_code(&code, detail)
    });

    match classified {
        Some(e) => {
            tracing::debug!(error = %e, "constraint rejected write");
            e
        }
        None => {
            tracing::error!(error = %err, "database operation failed");
            StorefrontError::Database(err.to_string())
        }
    }
}

/// Map an engine error code onto a constraint kind
fn classify_code(code: &str, detail: String) -> Option<StorefrontError> {
    match code {
        PG_UNIQUE | SQLITE_UNIQUE | SQLITE_PRIMARY_KEY => {
            Some(StorefrontError::UniqueViolation { detail })
        }
        PG_FOREIGN_KEY | SQLITE_FOREIGN_KEY | SQLITE_FOREIGN_KEY_RESTRICT => {
            Some(StorefrontError::ForeignKeyViolation { detail })
        }
        PG_NOT_NULL | SQLITE_NOT_NULL => Some(StorefrontError::NotNullViolation { detail }),
        PG_CHECK | SQLITE_CHECK => Some(StorefrontError::CheckViolation { detail }),
        _ => None,
    }
}

/// Engine error code and message, when the failure came from the database itself
fn database_code(err: &DbErr) -> Option<(String, String)> {
    let runtime = match err {
        DbErr::Exec(e) | DbErr::Query(e) | DbErr::Conn(e) => e,
        _ => return None,
    };

    match runtime {
        RuntimeErr::SqlxError(sqlx::Error::Database(db)) => {
            let code = db.code()?.into_owned();
            Some((code, db.message().to_string()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_is_a_generic_database_error() {
        let err = classify(DbErr::RecordNotFound("users".into()));
        assert!(matches!(err, StorefrontError::Database(_)));
    }

    #[test]
    fn restricted_parent_delete_is_a_foreign_key_violation() {
        for code in ["1811", "787", "23503"] {
            let err = classify_code(code, "FOREIGN KEY constraint failed".into());
            assert!(
                matches!(err, Some(StorefrontError::ForeignKeyViolation { .. })),
                "code {code} classified as {err:?}"
            );
        }
    }

    #[test]
    fn unknown_codes_are_left_unclassified() {
        assert!(classify_code("5", "database is locked".into()).is_none());
    }

    #[test]
    fn custom_errors_keep_their_message() {
        match classify(DbErr::Custom("pool closed".into())) {
            StorefrontError::Database(msg) => assert!(msg.contains("pool closed")),
            other => panic!("unexpected classification: {other:?}"),
        }
    }
}
