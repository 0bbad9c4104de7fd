use anyhow::Result;
use landfall_core::{DatastoreConfig, QueryParams};
use landfall_http::StormPageResponse;

use super::build_state;

pub(crate) async fn run_query(datastore: &DatastoreConfig, params: &QueryParams) -> Result<()> {
    let state = build_state(datastore).await?;
    let response = state.query_service.query_page(params).await?;
    println!("{}", serde_json::to_string_pretty(&StormPageResponse::from(response))?);
    Ok(())
}

pub(crate) async fn run_all(datastore: &DatastoreConfig) -> Result<()> {
    let state = build_state(datastore).await?;
    let response = state.query_service.list_all().await?;
    println!("{}", serde_json::to_string_pretty(&StormPageResponse::from(response))?);
    Ok(())
}
