//! Validation errors raised before any datastore work happens.

use thiserror::Error;

use crate::query::{LandfallCategory, SortColumn};

/// Caller-supplied input that failed an allow-list or range check.
///
/// Every variant maps to a client error at the HTTP edge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("invalid landfallCategory '{0}', expected one of {cats}", cats = LandfallCategory::ALL_VARIANTS_STR)]
    LandfallCategory(String),

    #[error("invalid sortColumn '{0}', expected one of {cols}", cols = SortColumn::ALL_VARIANTS_STR)]
    SortColumn(String),

    #[error("invalid pageSize {value}, must be between 1 and {max}")]
    PageSize { value: u32, max: u32 },

    /// A bulk-upload row that breaks a record invariant.
    #[error("invalid record '{id}': {reason}")]
    Record { id: String, reason: String },

    #[error("upload batch of {len} records exceeds the limit of {max}")]
    BatchTooLarge { len: usize, max: usize },
}

impl ValidationError {
    /// Name of the argument that failed, as it appears in the public API.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match *self {
            Self::LandfallCategory(_) => "landfallCategory",
            Self::SortColumn(_) => "sortColumn",
            Self::PageSize { .. } => "pageSize",
            Self::Record { .. } | Self::BatchTooLarge { .. } => "records",
        }
    }
}
