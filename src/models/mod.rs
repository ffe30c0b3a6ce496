//! Core data models for breach searches and their results.

mod field;
mod results;
mod search;

pub use field::{is_valid_field, FIELD_CATALOG};
pub use results::ExtractedResults;
pub use search::SearchRequest;
