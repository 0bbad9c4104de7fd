//! Typed error enum for the service layer.

use landfall_core::ValidationError;
use landfall_storage::StorageError;
use thiserror::Error;

/// Service-layer error: bad caller input, or a failed datastore stage.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller provided a value outside an allow-list or range.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// A datastore stage failed or timed out. Never retried here.
    #[error("data access: {0}")]
    DataAccess(#[from] StorageError),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying by the caller).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::DataAccess(e) if e.is_transient())
    }

    /// Whether this error represents a duplicate/conflict.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DataAccess(e) if e.is_duplicate())
    }

    /// Whether the caller is at fault.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
