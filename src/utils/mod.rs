//! Utility modules supporting search runs.
//!
//! - [`split_and_trim`], [`normalize_fields`], [`verify_fields`]: normalize and validate raw CLI lists
//! - [`extract_results`]: pull emails and passwords out of a raw response body
//! - [`ArtifactPaths`], [`write_artifact`], [`write_lines`]: persist the response and side files
//! - [`HttpClient`]: shared reqwest client with timeouts and a user agent
//!
//! # Extraction
//!
//! ```rust
//! use breach_search::utils::extract_results;
//!
//! let body = br#"{"results": [{"email": ["a@x.com", "b@x.com"], "password": "hunter2"}]}"#;
//! let results = extract_results(body).unwrap();
//! assert_eq!(results.total, 1);
//! assert_eq!(results.emails, vec!["a@x.com", "b@x.com"]);
//! assert_eq!(results.passwords, vec!["hunter2"]);
//! ```

mod extract;
mod http;
mod output;
mod validate;

pub use extract::{extract_results, FieldValue, ParseError};
pub use http::{HttpClient, DEFAULT_USER_AGENT};
pub use output::{write_artifact, write_lines, ArtifactPaths, OutputError};
pub use validate::{normalize_fields, split_and_trim, verify_fields, ValidationError};
