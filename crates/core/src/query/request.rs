//! Raw query parameters and their validated form.

use crate::error::ValidationError;

use super::{LandfallCategory, PageWindow, Predicate, SortColumn, SortOrder};

/// Check the two allow-listed identifiers.
///
/// Runs before anything is built from them.
///
/// # Errors
/// [`ValidationError::LandfallCategory`] or [`ValidationError::SortColumn`].
pub fn validate(
    landfall_category: &str,
    sort_column: &str,
) -> Result<(LandfallCategory, SortColumn), ValidationError> {
    Ok((landfall_category.parse()?, sort_column.parse()?))
}

/// Page request exactly as the caller sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub page_number: u32,
    pub page_size: u32,
    pub landfall_category: String,
    pub sort_column: String,
    pub ascending: bool,
    pub search_term: String,
}

impl QueryParams {
    /// Validate identifiers and page size into a [`QueryRequest`].
    ///
    /// # Errors
    /// Any [`ValidationError`] for an unknown category or column, or a page size
    /// outside `1..=max_page_size`.
    pub fn validate(&self, max_page_size: u32) -> Result<QueryRequest, ValidationError> {
        let (landfall_category, sort_column) =
            validate(&self.landfall_category, &self.sort_column)?;
        if self.page_size == 0 || self.page_size > max_page_size {
            return Err(ValidationError::PageSize { value: self.page_size, max: max_page_size });
        }
        Ok(QueryRequest {
            page_number: self.page_number,
            page_size: self.page_size,
            landfall_category,
            sort_column,
            ascending: self.ascending,
            search_term: self.search_term.clone(),
        })
    }
}

/// A page request whose identifiers come from the allow-lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub page_number: u32,
    pub page_size: u32,
    pub landfall_category: LandfallCategory,
    pub sort_column: SortColumn,
    pub ascending: bool,
    pub search_term: String,
}

impl QueryRequest {
    #[must_use]
    pub fn predicate(&self) -> Predicate {
        Predicate::build(self.landfall_category, &self.search_term)
    }

    #[must_use]
    pub const fn order(&self) -> SortOrder {
        SortOrder::new(self.sort_column, self.ascending)
    }

    #[must_use]
    pub fn window(&self) -> PageWindow {
        PageWindow::for_page(self.page_number, self.page_size)
    }
}
