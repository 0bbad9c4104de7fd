//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use landfall_core::{DatastoreConfig, PageWindow, Predicate, SortOrder, StormRecord};

use crate::error::StorageError;
use crate::traits::{StormQueryStore, StormUploadStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::SqliteStorage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <crate::MemoryStore as $trait>::$method(s, $($arg),*).await,
        }
    };
}

/// The gateway selected at startup.
#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::SqliteStorage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
    Memory(crate::MemoryStore),
}

impl StorageBackend {
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::SqliteStorage::new(db_path, pool_size)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url, max_connections).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(crate::MemoryStore::new())
    }

    /// Build the backend described by `config`.
    ///
    /// # Errors
    /// Returns [`StorageError::BackendUnavailable`] when the configured backend
    /// was compiled out, or the backend's own initialization error.
    pub async fn from_config(config: &DatastoreConfig) -> Result<Self, StorageError> {
        match config {
            #[cfg(feature = "sqlite")]
            DatastoreConfig::Sqlite { path, pool_size } => {
                let path = path.clone();
                let pool_size = *pool_size;
                tokio::task::spawn_blocking(move || Self::new_sqlite(&path, pool_size)).await?
            },
            #[cfg(not(feature = "sqlite"))]
            DatastoreConfig::Sqlite { .. } => Err(StorageError::BackendUnavailable("sqlite")),
            #[cfg(feature = "postgres")]
            DatastoreConfig::Postgres { url, max_connections } => {
                Self::new_postgres(url, *max_connections).await
            },
            #[cfg(not(feature = "postgres"))]
            DatastoreConfig::Postgres { .. } => Err(StorageError::BackendUnavailable("postgres")),
            _ => Err(StorageError::BackendUnavailable("unknown")),
        }
    }

    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

// ── StormQueryStore ──────────────────────────────────────────────

#[async_trait]
impl StormQueryStore for StorageBackend {
    async fn count(&self, predicate: &Predicate) -> Result<u64, StorageError> {
        dispatch!(self, StormQueryStore, count(predicate))
    }

    async fn fetch_page(
        &self,
        predicate: &Predicate,
        order: SortOrder,
        window: Option<PageWindow>,
    ) -> Result<Vec<StormRecord>, StorageError> {
        dispatch!(self, StormQueryStore, fetch_page(predicate, order, window))
    }
}

// ── StormUploadStore ─────────────────────────────────────────────

#[async_trait]
impl StormUploadStore for StorageBackend {
    async fn insert_batch(&self, records: &[StormRecord]) -> Result<usize, StorageError> {
        dispatch!(self, StormUploadStore, insert_batch(records))
    }
}
