//! Service layer for landfall
//!
//! Centralizes query orchestration and bulk upload between the HTTP/CLI edges
//! and the datastore gateways.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod query_service;
mod stage;
mod upload_service;

#[cfg(test)]
mod test_support;

pub use error::ServiceError;
pub use query_service::StormQueryService;
pub use upload_service::UploadService;
