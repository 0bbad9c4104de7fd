//! Core types for landfall.
//!
//! Storm records, the allow-listed query vocabulary, the predicate builder and
//! pagination arithmetic. Everything here is pure; datastore access lives in
//! `landfall-storage`.

pub mod config;
pub mod constants;
pub mod env_config;
mod error;
pub mod query;
mod storm;

pub use config::{DatastoreConfig, QueryConfig};
pub use constants::*;
pub use error::ValidationError;
pub use query::{
    LandfallCategory, PageMetadata, PageWindow, Predicate, QueryParams, QueryRequest,
    QueryResponse, SortColumn, SortOrder,
};
pub use storm::{FlagField, IntField, StormRecord, TextField, normalize_date};
