use std::sync::Arc;

use anyhow::Result;
use landfall_core::DatastoreConfig;
use landfall_http::create_router;

use super::build_state;

pub(crate) async fn run(datastore: &DatastoreConfig, port: u16, host: String) -> Result<()> {
    let state = Arc::new(build_state(datastore).await?);
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
