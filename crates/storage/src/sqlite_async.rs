//! Async trait implementations for [`SqliteStorage`] via `spawn_blocking`.

use async_trait::async_trait;
use landfall_core::{PageWindow, Predicate, SortOrder, StormRecord};

use crate::error::StorageError;
use crate::storage::SqliteStorage;
use crate::traits::{StormQueryStore, StormUploadStore};

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

#[async_trait]
impl StormQueryStore for SqliteStorage {
    async fn count(&self, predicate: &Predicate) -> Result<u64, StorageError> {
        let s = self.clone();
        let predicate = predicate.clone();
        blocking(move || s.count_storms(&predicate)).await
    }

    async fn fetch_page(
        &self,
        predicate: &Predicate,
        order: SortOrder,
        window: Option<PageWindow>,
    ) -> Result<Vec<StormRecord>, StorageError> {
        let s = self.clone();
        let predicate = predicate.clone();
        blocking(move || s.fetch_storms(&predicate, order, window)).await
    }
}

#[async_trait]
impl StormUploadStore for SqliteStorage {
    async fn insert_batch(&self, records: &[StormRecord]) -> Result<usize, StorageError> {
        let s = self.clone();
        let records = records.to_vec();
        blocking(move || s.insert_storms(&records)).await
    }
}
