//! Datastore Gateway traits.
//!
//! The query engine reaches the dataset only through these: a read side
//! ([`StormQueryStore`]) used by the count and page stages, and a write side
//! ([`StormUploadStore`]) used by bulk upload. One implementation exists per
//! backend; the concrete one is chosen when the backend is constructed.

pub mod query;
pub mod upload;

pub use query::StormQueryStore;
pub use upload::StormUploadStore;

/// A gateway offering both sides. Blanket-implemented.
pub trait StormStore: StormQueryStore + StormUploadStore {}

impl<T: StormQueryStore + StormUploadStore + ?Sized> StormStore for T {}
