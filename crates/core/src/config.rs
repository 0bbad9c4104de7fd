//! Startup configuration values.
//!
//! Built once by the binary and passed down explicitly; nothing in the
//! library crates reads process-wide state on its own.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_DB_POOL_SIZE, DEFAULT_STAGE_TIMEOUT_MS, MAX_PAGE_SIZE, PG_POOL_MAX_CONNECTIONS,
};
use crate::env_config::{env_duration_ms, env_parse_with_default};

/// Which datastore backs the query engine, and how to reach it.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatastoreConfig {
    Sqlite { path: PathBuf, pool_size: u32 },
    Postgres { url: String, max_connections: u32 },
}

impl DatastoreConfig {
    /// SQLite file at `path`, pool size from `LANDFALL_DB_POOL_SIZE`.
    #[must_use]
    pub fn sqlite(path: impl Into<PathBuf>) -> Self {
        Self::Sqlite {
            path: path.into(),
            pool_size: env_parse_with_default("LANDFALL_DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE),
        }
    }

    /// PostgreSQL at `url`, pool size from `LANDFALL_DB_POOL_SIZE`.
    #[must_use]
    pub fn postgres(url: impl Into<String>) -> Self {
        Self::Postgres {
            url: url.into(),
            max_connections: env_parse_with_default(
                "LANDFALL_DB_POOL_SIZE",
                PG_POOL_MAX_CONNECTIONS,
            ),
        }
    }

    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match *self {
            Self::Sqlite { .. } => "sqlite",
            Self::Postgres { .. } => "postgres",
        }
    }
}

// Connection URLs can carry credentials; keep them out of logs.
impl std::fmt::Debug for DatastoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite { path, pool_size } => f
                .debug_struct("Sqlite")
                .field("path", path)
                .field("pool_size", pool_size)
                .finish(),
            Self::Postgres { max_connections, .. } => f
                .debug_struct("Postgres")
                .field("url", &"<redacted>")
                .field("max_connections", max_connections)
                .finish(),
        }
    }
}

/// Limits applied by the query engine to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    /// Upper bound for each datastore stage (count, page, upload).
    pub stage_timeout: Duration,
    /// Largest accepted `pageSize`.
    pub max_page_size: u32,
}

impl QueryConfig {
    /// Reads `LANDFALL_QUERY_TIMEOUT_MS` and `LANDFALL_MAX_PAGE_SIZE`.
    #[must_use]
    pub fn from_env() -> Self {
        let max_page_size = match env_parse_with_default("LANDFALL_MAX_PAGE_SIZE", MAX_PAGE_SIZE) {
            0 => MAX_PAGE_SIZE,
            n => n,
        };
        Self {
            stage_timeout: env_duration_ms("LANDFALL_QUERY_TIMEOUT_MS", DEFAULT_STAGE_TIMEOUT_MS),
            max_page_size,
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stage_timeout: Duration::from_millis(DEFAULT_STAGE_TIMEOUT_MS),
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}
