//! Response types (Serialize)

use landfall_core::{PageMetadata, QueryResponse, StormRecord};
use serde::Serialize;

/// One storm as exposed by the read endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StormView {
    #[serde(rename = "stormID")]
    pub storm_id: String,
    pub storm_name: String,
    pub max_wind_speed: i32,
    pub wind_speed_at_landfall: i32,
    pub strict_wind_speed_at_landfall: i32,
    pub landfall_date: String,
    pub strict_landfall_date: String,
    pub is_hurricane: bool,
    pub has_liberal_landfall: bool,
    pub has_strict_landfall: bool,
}

impl From<StormRecord> for StormView {
    fn from(r: StormRecord) -> Self {
        Self {
            storm_id: r.id,
            storm_name: r.name,
            max_wind_speed: r.max_wind_speed,
            wind_speed_at_landfall: r.wind_speed_at_landfall,
            strict_wind_speed_at_landfall: r.strict_wind_speed_at_landfall,
            landfall_date: r.landfall_date,
            strict_landfall_date: r.strict_landfall_date,
            is_hurricane: r.is_hurricane,
            has_liberal_landfall: r.has_liberal_landfall,
            has_strict_landfall: r.has_strict_landfall,
        }
    }
}

/// `{ "data": [...], "metaData": {...} }`
#[derive(Debug, Serialize)]
pub struct StormPageResponse {
    pub data: Vec<StormView>,
    #[serde(rename = "metaData")]
    pub meta_data: PageMetadata,
}

impl From<QueryResponse> for StormPageResponse {
    fn from(response: QueryResponse) -> Self {
        Self {
            data: response.data.into_iter().map(StormView::from).collect(),
            meta_data: response.metadata,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub inserted: usize,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
