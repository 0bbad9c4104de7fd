//! In-memory gateway.
//!
//! Evaluates predicates directly against a vector of records. Used as a test
//! double for the service layer and as the reference the SQL gateways are
//! checked against in the contract suite.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use landfall_core::query::SortKey;
use landfall_core::{PageWindow, Predicate, SortOrder, StormRecord};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{StormQueryStore, StormUploadStore};

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Vec<StormRecord>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with `records`, skipping upload validation.
    #[must_use]
    pub fn with_records(records: Vec<StormRecord>) -> Self {
        Self { records: Arc::new(RwLock::new(records)) }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

/// Chosen column, then id ascending. Text compares byte-wise.
fn compare(a: &StormRecord, b: &StormRecord, order: SortOrder) -> Ordering {
    let primary = match order.column.key() {
        SortKey::Text(field) => a.text(field).cmp(b.text(field)),
        SortKey::Int(field) => a.int(field).cmp(&b.int(field)),
    };
    let primary = if order.ascending { primary } else { primary.reverse() };
    primary.then_with(|| a.id.cmp(&b.id))
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl StormQueryStore for MemoryStore {
    async fn count(&self, predicate: &Predicate) -> Result<u64, StorageError> {
        let records = self.records.read().await;
        let matching = records.iter().filter(|r| predicate.matches(r)).count();
        Ok(u64::try_from(matching).unwrap_or(u64::MAX))
    }

    async fn fetch_page(
        &self,
        predicate: &Predicate,
        order: SortOrder,
        window: Option<PageWindow>,
    ) -> Result<Vec<StormRecord>, StorageError> {
        let records = self.records.read().await;
        let mut matching: Vec<&StormRecord> =
            records.iter().filter(|r| predicate.matches(r)).collect();
        matching.sort_by(|a, b| compare(a, b, order));
        let rows = match window {
            Some(w) => matching
                .into_iter()
                .skip(to_usize(w.offset))
                .take(to_usize(w.limit))
                .cloned()
                .collect(),
            None => matching.into_iter().cloned().collect(),
        };
        Ok(rows)
    }
}

#[async_trait]
impl StormUploadStore for MemoryStore {
    async fn insert_batch(&self, records: &[StormRecord]) -> Result<usize, StorageError> {
        let mut stored = self.records.write().await;
        {
            let mut seen: HashSet<&str> = stored.iter().map(|r| r.id.as_str()).collect();
            if let Some(dup) = records.iter().find(|r| !seen.insert(r.id.as_str())) {
                return Err(StorageError::Duplicate(format!("storm id {}", dup.id)));
            }
        }
        stored.extend_from_slice(records);
        Ok(records.len())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use landfall_core::{LandfallCategory, SortColumn};

    use super::*;

    fn storm(id: &str, name: &str, wind: i32) -> StormRecord {
        StormRecord {
            id: id.to_owned(),
            name: name.to_owned(),
            year: 2000,
            duration_days: 3,
            max_wind_speed: wind,
            wind_speed_at_landfall: wind,
            strict_wind_speed_at_landfall: wind,
            landfall_date: "2000-09-01".to_owned(),
            strict_landfall_date: "2000-09-01".to_owned(),
            is_hurricane: wind >= 64,
            has_liberal_landfall: true,
            has_strict_landfall: false,
            has_any_landfall: true,
        }
    }

    #[tokio::test]
    async fn ties_on_sort_column_fall_back_to_id() {
        let store = MemoryStore::with_records(vec![
            storm("C", "X", 50),
            storm("A", "X", 50),
            storm("B", "X", 90),
        ]);
        let rows = store
            .fetch_page(
                &Predicate::always(),
                SortOrder::new(SortColumn::MaxWindSpeed, false),
                None,
            )
            .await
            .unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["B", "A", "C"]);
    }

    #[tokio::test]
    async fn duplicate_in_batch_stores_nothing() {
        let store = MemoryStore::with_records(vec![storm("A", "X", 50)]);
        let err = store.insert_batch(&[storm("B", "Y", 60), storm("A", "Z", 70)]).await.unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(store.len().await, 1);
        let predicate = Predicate::build(LandfallCategory::Any, "");
        assert_eq!(store.count(&predicate).await.unwrap(), 1);
    }
}
