use async_trait::async_trait;
use landfall_core::StormRecord;

use crate::error::StorageError;

/// Bulk write access.
#[async_trait]
pub trait StormUploadStore: Send + Sync {
    /// Insert every record in one transaction. Returns the number inserted.
    ///
    /// All-or-nothing: on any failure (including a duplicate id, reported as
    /// [`StorageError::Duplicate`]) no record of the batch is stored.
    async fn insert_batch(&self, records: &[StormRecord]) -> Result<usize, StorageError>;
}
