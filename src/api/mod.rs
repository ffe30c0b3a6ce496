//! Search API clients.
//!
//! [`SearchApi`] is the seam between a search run and the network: it takes
//! a validated [`SearchRequest`] and hands back the raw response body.
//! [`BreachVipClient`] talks to the real service over HTTPS, [`MockApi`]
//! returns canned responses for tests.

mod breach_vip;
pub mod mock;

pub use breach_vip::{BreachVipClient, BREACH_VIP_API_URL};
pub use mock::MockApi;

use async_trait::async_trait;

use crate::models::SearchRequest;

/// A backend capable of running a search.
#[async_trait]
pub trait SearchApi: Send + Sync + std::fmt::Debug {
    /// Short identifier used in logs
    fn id(&self) -> &str;

    /// Endpoint the request is sent to
    fn endpoint(&self) -> &str;

    /// Submit `request` and return the raw response body.
    ///
    /// A non-success HTTP status is an error; the body is only returned for
    /// successful responses.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<u8>, ApiError>;
}

/// Errors that can occur when calling a search API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("API returned status {code}: {reason}")]
    Status { code: u16, reason: String },

    /// The endpoint URL is unusable
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Client construction or request encoding failed
    #[error("Client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Client(err.to_string())
    }
}
