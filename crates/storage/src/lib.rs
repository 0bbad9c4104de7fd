//! Datastore gateways for landfall.
//!
//! One async gateway trait pair, implemented for SQLite (default), PostgreSQL
//! (`postgres` feature) and an in-memory store. [`StorageBackend`] selects one
//! at construction time.

#![allow(clippy::module_name_repetitions, reason = "StorageError/StorageBackend read better qualified")]

pub mod backend;
pub mod error;
mod memory;
#[cfg(feature = "sqlite")]
mod migrations;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
pub mod pg_storage;
#[cfg(any(feature = "sqlite", feature = "postgres"))]
mod sql;
#[cfg(feature = "sqlite")]
mod sqlite_async;
#[cfg(feature = "sqlite")]
mod storage;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use migrations::SCHEMA_VERSION;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
#[cfg(feature = "sqlite")]
pub use storage::SqliteStorage;
pub use traits::{StormQueryStore, StormStore, StormUploadStore};
