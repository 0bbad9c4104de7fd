//! Bounded execution of one datastore stage.

use std::future::Future;
use std::time::Duration;

use landfall_storage::StorageError;

use crate::ServiceError;

/// Await `fut` for at most `limit`. Failures are logged with the stage name and
/// surfaced unchanged as [`ServiceError::DataAccess`].
pub(crate) async fn run_stage<T>(
    stage: &'static str,
    limit: Duration,
    fut: impl Future<Output = Result<T, StorageError>>,
) -> Result<T, ServiceError> {
    let err = match tokio::time::timeout(limit, fut).await {
        Ok(Ok(value)) => return Ok(value),
        Ok(Err(e)) => e,
        Err(_) => StorageError::timeout(stage, limit),
    };
    tracing::error!(error = %err, stage, "datastore stage failed");
    Err(ServiceError::DataAccess(err))
}
