pub mod storms;
pub mod upload;
