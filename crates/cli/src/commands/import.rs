use std::path::Path;

use anyhow::{Context as _, Result};
use landfall_core::{DatastoreConfig, StormRecord};
use landfall_http::UploadResponse;

use super::build_state;

/// Load a JSON array of storm records (uploader or read field names) and store
/// it in one batch.
pub(crate) async fn run(datastore: &DatastoreConfig, file: &Path) -> Result<()> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("reading {}", file.display()))?;
    let records: Vec<StormRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {} as a JSON array of storm records", file.display()))?;

    let state = build_state(datastore).await?;
    let inserted = state.upload_service.upload(records).await?;
    tracing::info!(inserted, file = %file.display(), "import finished");
    println!("{}", serde_json::to_string_pretty(&UploadResponse { inserted })?);
    Ok(())
}
