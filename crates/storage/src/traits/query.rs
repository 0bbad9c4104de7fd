use async_trait::async_trait;
use landfall_core::{PageWindow, Predicate, SortOrder, StormRecord};

use crate::error::StorageError;

/// Read access to the storm dataset.
///
/// Both methods take the same [`Predicate`] value; implementations must render
/// it identically for each so the count and the page agree on membership.
#[async_trait]
pub trait StormQueryStore: Send + Sync {
    /// Number of records matching `predicate`. No ordering, no window.
    async fn count(&self, predicate: &Predicate) -> Result<u64, StorageError>;

    /// Matching records ordered by `order` (ties broken by id ascending),
    /// restricted to `window` when given. An offset past the end yields an
    /// empty vector.
    async fn fetch_page(
        &self,
        predicate: &Predicate,
        order: SortOrder,
        window: Option<PageWindow>,
    ) -> Result<Vec<StormRecord>, StorageError>;
}
