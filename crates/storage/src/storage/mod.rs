//! `SQLite` gateway.
//!
//! All methods here are synchronous; [`crate::sqlite_async`] lifts them onto
//! tokio's blocking pool for the async traits.

mod storms;

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use rusqlite::types::ToSqlOutput;

use crate::error::StorageError;
use crate::migrations;
use crate::sql::SqlValue;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Storm gateway over an `SQLite` connection pool.
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

impl rusqlite::ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Int(v) => v.to_sql(),
            Self::Text(s) => s.to_sql(),
        }
    }
}

/// Concurrency settings applied to every pooled connection.
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

impl SqliteStorage {
    /// Open (or create) the database file and bring its schema up to date.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or a migration fails.
    pub fn new(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Database {
                backend: "sqlite",
                source: Box::new(e),
            })?;
        }

        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);
        let pool = Pool::builder().max_size(pool_size.max(1)).build(manager)?;

        // Run migrations on first connection
        let conn = pool.get()?;
        migrations::run_migrations(&conn).map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!(pool_size, path = %db_path.display(), "SQLite storage initialized");

        Ok(Self { pool })
    }

    pub(crate) fn conn(&self) -> Result<PooledConn, StorageError> {
        Ok(self.pool.get()?)
    }

    /// Current schema version of the underlying database.
    ///
    /// # Errors
    /// Returns an error if no connection is available.
    pub fn schema_version(&self) -> Result<i32, StorageError> {
        let conn = self.conn()?;
        Ok(migrations::schema_version(&conn)?)
    }
}
