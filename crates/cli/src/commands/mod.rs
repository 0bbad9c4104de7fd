pub(crate) mod import;
pub(crate) mod query;
pub(crate) mod serve;

use std::sync::Arc;

use anyhow::Result;
use landfall_core::{DatastoreConfig, QueryConfig};
use landfall_http::AppState;
use landfall_storage::StorageBackend;

/// Open the configured gateway and wire both services over it.
pub(crate) async fn build_state(datastore: &DatastoreConfig) -> Result<AppState> {
    tracing::debug!(?datastore, "opening datastore");
    let backend = StorageBackend::from_config(datastore).await?;
    let config = QueryConfig::from_env();
    tracing::info!(
        backend = backend.backend_name(),
        stage_timeout_ms = u64::try_from(config.stage_timeout.as_millis()).unwrap_or(u64::MAX),
        max_page_size = config.max_page_size,
        "datastore ready"
    );
    Ok(AppState::new(Arc::new(backend), config))
}
