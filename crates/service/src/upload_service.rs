use std::sync::Arc;

use landfall_core::{MAX_UPLOAD_RECORDS, QueryConfig, StormRecord, UNNAMED_STORM, ValidationError};
use landfall_storage::StormStore;

use crate::ServiceError;
use crate::stage::run_stage;

/// Bulk ingestion of storm records.
pub struct UploadService {
    store: Arc<dyn StormStore>,
    config: QueryConfig,
}

fn prepare(record: StormRecord) -> StormRecord {
    let mut record = record.with_normalized_dates();
    if record.name.trim().is_empty() {
        UNNAMED_STORM.clone_into(&mut record.name);
    }
    record
}

impl UploadService {
    #[must_use]
    pub fn new(store: Arc<dyn StormStore>, config: QueryConfig) -> Self {
        Self { store, config }
    }

    /// Normalize, validate and insert a batch. Returns the number stored.
    ///
    /// The whole batch is checked before the datastore is touched; one bad
    /// record rejects all of them. The insert itself is all-or-nothing.
    pub async fn upload(&self, records: Vec<StormRecord>) -> Result<usize, ServiceError> {
        if records.is_empty() {
            return Ok(0);
        }
        if records.len() > MAX_UPLOAD_RECORDS {
            return Err(ValidationError::BatchTooLarge {
                len: records.len(),
                max: MAX_UPLOAD_RECORDS,
            }
            .into());
        }

        let records: Vec<StormRecord> = records.into_iter().map(prepare).collect();
        for record in &records {
            record.validate()?;
        }

        let inserted =
            run_stage("upload", self.config.stage_timeout, self.store.insert_batch(&records))
                .await?;
        tracing::info!(inserted, "storm batch uploaded");
        Ok(inserted)
    }
}
