use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use landfall_core::QueryParams;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{LegacyPageSegment, StormPageQuery};
use crate::response_types::StormPageResponse;

async fn run_page_query(
    state: &AppState,
    params: QueryParams,
) -> Result<Json<StormPageResponse>, ApiError> {
    let response = state.query_service.query_page(&params).await?;
    Ok(Json(response.into()))
}

/// `GET /storm+info/{page}+{size}+{category}+{sort}+{ascending}`
pub async fn storm_page_legacy(
    State(state): State<Arc<AppState>>,
    segment: Result<Path<String>, PathRejection>,
) -> Result<Json<StormPageResponse>, ApiError> {
    let Path(segment) = segment?;
    let segment: LegacyPageSegment = segment.parse().map_err(ApiError::BadRequest)?;
    run_page_query(&state, segment.into_params(String::new())).await
}

/// `GET /storm+info/{page}+{size}+{category}+{sort}+{ascending}/{searchTerm}`
pub async fn storm_page_legacy_search(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<StormPageResponse>, ApiError> {
    let Path((segment, search_term)) = path?;
    let segment: LegacyPageSegment = segment.parse().map_err(ApiError::BadRequest)?;
    run_page_query(&state, segment.into_params(search_term)).await
}

/// `GET /api/storms?pageNumber=..&pageSize=..&landfallCategory=..&sortColumn=..&ascending=..&searchTerm=..`
pub async fn storm_page(
    State(state): State<Arc<AppState>>,
    query: Result<Query<StormPageQuery>, QueryRejection>,
) -> Result<Json<StormPageResponse>, ApiError> {
    let Query(query) = query?;
    run_page_query(&state, query.into()).await
}

/// `GET /all+storm+info`: every record sorted by name, single-page envelope.
pub async fn all_storms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StormPageResponse>, ApiError> {
    let response = state.query_service.list_all().await?;
    Ok(Json(response.into()))
}
