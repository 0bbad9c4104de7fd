use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use landfall_core::StormRecord;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::UploadResponse;

/// `POST /upload`: JSON array of storm records, stored all-or-nothing.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Vec<StormRecord>>, JsonRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let Json(records) = body?;
    let received = records.len();
    let inserted = state.upload_service.upload(records).await?;
    tracing::debug!(received, inserted, "upload request handled");
    Ok(Json(UploadResponse { inserted }))
}
