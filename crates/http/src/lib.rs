//! HTTP API server for landfall.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Json, Router};
use landfall_core::QueryConfig;
use landfall_service::{StormQueryService, UploadService};
use landfall_storage::StormStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use query_types::{LegacyPageSegment, StormPageQuery};
pub use response_types::{StormPageResponse, StormView, UploadResponse, VersionResponse};

/// Largest accepted upload body. A full batch of records fits comfortably.
pub const MAX_UPLOAD_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Paged and unpaged storm queries
    pub query_service: Arc<StormQueryService>,
    /// Bulk record upload
    pub upload_service: Arc<UploadService>,
}

impl AppState {
    /// Both services over the same gateway.
    #[must_use]
    pub fn new(store: Arc<dyn StormStore>, config: QueryConfig) -> Self {
        Self {
            query_service: Arc::new(StormQueryService::new(Arc::clone(&store), config)),
            upload_service: Arc::new(UploadService::new(store, config)),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/all+storm+info", get(handlers::storms::all_storms))
        .route("/api/storms/all", get(handlers::storms::all_storms))
        .route("/storm+info/{segment}", get(handlers::storms::storm_page_legacy))
        .route(
            "/storm+info/{segment}/{search_term}",
            get(handlers::storms::storm_page_legacy_search),
        )
        .route("/api/storms", get(handlers::storms::storm_page))
        .route(
            "/upload",
            post(handlers::upload::upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
