//! Query construction: allow-listed parameters, predicates and page windows.

mod category;
mod page;
mod predicate;
mod request;
mod sort;

pub use category::LandfallCategory;
pub use page::{PageMetadata, PageWindow, QueryResponse, assemble, total_pages};
pub use predicate::{AnyOf, Condition, Predicate, SearchBranch};
pub use request::{QueryParams, QueryRequest, validate};
pub use sort::{SortColumn, SortKey, SortOrder};
