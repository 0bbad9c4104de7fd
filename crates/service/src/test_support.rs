//! Gateway doubles for service tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use landfall_core::{PageWindow, Predicate, SortOrder, StormRecord};
use landfall_storage::{MemoryStore, StorageError, StormQueryStore, StormUploadStore};

pub fn storm(i: usize) -> StormRecord {
    let year = 1950 + i32::try_from(i).unwrap_or(0);
    StormRecord {
        id: format!("AL{i:02}{year}"),
        name: format!("STORM{:02}", (i * 7) % 25),
        year,
        duration_days: 4,
        max_wind_speed: 60 + year % 40,
        wind_speed_at_landfall: 50,
        strict_wind_speed_at_landfall: 50,
        landfall_date: format!("{year}-09-10"),
        strict_landfall_date: format!("{year}-09-10"),
        is_hurricane: true,
        has_liberal_landfall: true,
        has_strict_landfall: true,
        has_any_landfall: true,
    }
}

/// `n` records, all with every landfall flag set.
pub fn any_storms(n: usize) -> Vec<StormRecord> {
    (0..n).map(storm).collect()
}

#[derive(Default)]
struct CallLog {
    predicates: Vec<Predicate>,
    counts: usize,
    pages: usize,
    orders: Vec<SortOrder>,
    windows: Vec<Option<PageWindow>>,
    inserts: usize,
}

/// Shared view of what a [`RecordingStore`] was asked to do.
#[derive(Clone, Default)]
pub struct Calls(Arc<Mutex<CallLog>>);

#[expect(clippy::unwrap_used, reason = "test code")]
impl Calls {
    /// `(count calls, page calls)`.
    pub fn snapshot(&self) -> (usize, usize) {
        let log = self.0.lock().unwrap();
        (log.counts, log.pages)
    }

    pub fn predicates(&self) -> Vec<Predicate> {
        self.0.lock().unwrap().predicates.clone()
    }

    pub fn orders(&self) -> Vec<SortOrder> {
        self.0.lock().unwrap().orders.clone()
    }

    pub fn windows(&self) -> Vec<Option<PageWindow>> {
        self.0.lock().unwrap().windows.clone()
    }

    pub fn inserts(&self) -> usize {
        self.0.lock().unwrap().inserts
    }
}

/// Wraps a [`MemoryStore`] and records every call.
pub struct RecordingStore {
    inner: MemoryStore,
    calls: Calls,
}

impl RecordingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self { inner, calls: Calls::default() }
    }

    pub fn calls(&self) -> Calls {
        self.calls.clone()
    }
}

#[async_trait]
#[expect(clippy::unwrap_used, reason = "test code")]
impl StormQueryStore for RecordingStore {
    async fn count(&self, predicate: &Predicate) -> Result<u64, StorageError> {
        {
            let mut log = self.calls.0.lock().unwrap();
            log.counts += 1;
            log.predicates.push(predicate.clone());
        }
        self.inner.count(predicate).await
    }

    async fn fetch_page(
        &self,
        predicate: &Predicate,
        order: SortOrder,
        window: Option<PageWindow>,
    ) -> Result<Vec<StormRecord>, StorageError> {
        {
            let mut log = self.calls.0.lock().unwrap();
            log.pages += 1;
            log.predicates.push(predicate.clone());
            log.orders.push(order);
            log.windows.push(window);
        }
        self.inner.fetch_page(predicate, order, window).await
    }
}

#[async_trait]
#[expect(clippy::unwrap_used, reason = "test code")]
impl StormUploadStore for RecordingStore {
    async fn insert_batch(&self, records: &[StormRecord]) -> Result<usize, StorageError> {
        self.calls.0.lock().unwrap().inserts += 1;
        self.inner.insert_batch(records).await
    }
}

fn broken() -> StorageError {
    StorageError::Database {
        backend: "test",
        source: "connection reset".into(),
    }
}

/// Every call fails with a database error.
pub struct FailingStore;

#[async_trait]
impl StormQueryStore for FailingStore {
    async fn count(&self, _: &Predicate) -> Result<u64, StorageError> {
        Err(broken())
    }

    async fn fetch_page(
        &self,
        _: &Predicate,
        _: SortOrder,
        _: Option<PageWindow>,
    ) -> Result<Vec<StormRecord>, StorageError> {
        Err(broken())
    }
}

#[async_trait]
impl StormUploadStore for FailingStore {
    async fn insert_batch(&self, _: &[StormRecord]) -> Result<usize, StorageError> {
        Err(broken())
    }
}

/// Every call sleeps for the given duration, then succeeds with nothing.
pub struct SlowStore(pub Duration);

#[async_trait]
impl StormQueryStore for SlowStore {
    async fn count(&self, _: &Predicate) -> Result<u64, StorageError> {
        tokio::time::sleep(self.0).await;
        Ok(0)
    }

    async fn fetch_page(
        &self,
        _: &Predicate,
        _: SortOrder,
        _: Option<PageWindow>,
    ) -> Result<Vec<StormRecord>, StorageError> {
        tokio::time::sleep(self.0).await;
        Ok(Vec::new())
    }
}

#[async_trait]
impl StormUploadStore for SlowStore {
    async fn insert_batch(&self, records: &[StormRecord]) -> Result<usize, StorageError> {
        tokio::time::sleep(self.0).await;
        Ok(records.len())
    }
}
