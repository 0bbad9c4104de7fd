//! Page windows and response assembly.

use serde::{Deserialize, Serialize};

use crate::storm::StormRecord;

/// `(offset, limit)` derived from `(pageNumber, pageSize)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

impl PageWindow {
    /// `offset = page_number * page_size`. Widened to `u64`, so it cannot overflow.
    #[must_use]
    pub fn for_page(page_number: u32, page_size: u32) -> Self {
        let limit = u64::from(page_size);
        Self { offset: u64::from(page_number) * limit, limit }
    }
}

/// `ceil(total_records / page_size)` in integer arithmetic; 0 for a zero page size.
#[must_use]
pub fn total_pages(total_records: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_records.div_ceil(page_size)
}

/// Pagination metadata returned alongside every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub current_page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub total_records: u64,
}

impl PageMetadata {
    #[must_use]
    pub fn new(current_page: u64, page_size: u64, total_records: u64) -> Self {
        Self {
            current_page,
            page_size,
            total_pages: total_pages(total_records, page_size),
            total_records,
        }
    }

    /// Metadata for an unpaged listing: everything on page 0.
    #[must_use]
    pub fn single_page(total_records: u64) -> Self {
        Self::new(0, total_records, total_records)
    }
}

/// One page of records plus its metadata. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    pub data: Vec<StormRecord>,
    pub metadata: PageMetadata,
}

/// Combine the page stage rows with the count stage total.
///
/// `page_number` is echoed as-is; a page past the end simply carries no rows.
#[must_use]
pub fn assemble(
    rows: Vec<StormRecord>,
    total_records: u64,
    page_number: u32,
    page_size: u32,
) -> QueryResponse {
    QueryResponse {
        data: rows,
        metadata: PageMetadata::new(
            u64::from(page_number),
            u64::from(page_size),
            total_records,
        ),
    }
}
