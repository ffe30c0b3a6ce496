//! # Breach Search
//!
//! A command-line client for the breach.vip search API.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Field catalog, the validated [`SearchRequest`], and [`ExtractedResults`]
//! - [`api`]: The [`SearchApi`] trait with HTTP and mock implementations
//! - [`runner`]: A single search run, from request to saved artifacts
//! - [`utils`]: Input normalization, response extraction, file output, HTTP client
//! - [`config`]: Configuration management
//! - [`ui`]: Terminal output

pub mod api;
pub mod config;
pub mod models;
pub mod runner;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use api::{ApiError, BreachVipClient, SearchApi};
pub use models::{ExtractedResults, SearchRequest};
pub use runner::{RunError, RunSummary, SearchRunner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
