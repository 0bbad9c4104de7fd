//! Typed error enum for the storage layer.
//!
//! Every gateway reports failures through [`StorageError`], so callers can tell
//! duplicates and timeouts apart from opaque backend faults without downcasting.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Unique constraint violation (a storm id that already exists).
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// SQL, connection or driver failure.
    #[error("database error ({backend}): {source}")]
    Database {
        backend: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No pooled connection could be acquired.
    #[error("connection pool error: {0}")]
    Pool(String),

    /// A stage did not finish within its configured bound.
    #[error("{operation} timed out after {timeout_ms} ms")]
    Timeout { operation: &'static str, timeout_ms: u64 },

    /// Row data could not be mapped onto a storm record.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),

    /// The blocking task running a SQLite call panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(String),

    /// The configured backend was not compiled into this build.
    #[error("{0} support is not enabled in this build")]
    BackendUnavailable(&'static str),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying by the caller).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Pool(_) | Self::Timeout { .. })
    }

    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    #[must_use]
    pub fn timeout(operation: &'static str, timeout: std::time::Duration) -> Self {
        Self::Timeout {
            operation,
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Custom `From<rusqlite::Error>`, NOT blanket `#[from]`.
///
/// - primary key / unique constraint failures → `Duplicate`
/// - everything else → `Database`
#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::ffi;

        match &err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || code.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Self::Duplicate(message.clone().unwrap_or_else(|| err.to_string()))
            },
            rusqlite::Error::FromSqlConversionFailure(..)
            | rusqlite::Error::InvalidColumnType(..)
            | rusqlite::Error::IntegralValueOutOfRange(..) => Self::DataCorruption {
                context: "SQLite row does not map onto a storm record".to_owned(),
                source: Box::new(err),
            },
            _ => Self::Database { backend: "sqlite", source: Box::new(err) },
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(err: r2d2::Error) -> Self {
        Self::Pool(err.to_string())
    }
}

/// Custom `From<sqlx::Error>`, NOT blanket `#[from]`.
///
/// - SQLSTATE 23505 → `Duplicate`
/// - pool timeouts → `Pool`
/// - column decode failures → `DataCorruption`
/// - everything else → `Database`
#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate(db_err.message().to_owned())
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => Self::Pool(err.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::ColumnNotFound(_) => {
                Self::DataCorruption {
                    context: "PostgreSQL row does not map onto a storm record".to_owned(),
                    source: Box::new(err),
                }
            },
            _ => Self::Database { backend: "postgres", source: Box::new(err) },
        }
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err.to_string())
    }
}
