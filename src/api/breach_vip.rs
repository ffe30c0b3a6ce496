//! breach.vip search client.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::api::{ApiError, SearchApi};
use crate::models::SearchRequest;
use crate::utils::HttpClient;

/// Public search endpoint
pub const BREACH_VIP_API_URL: &str = "https://breach.vip/api/search";

/// Client for the breach.vip JSON search endpoint.
#[derive(Debug, Clone)]
pub struct BreachVipClient {
    client: HttpClient,
    url: String,
}

impl BreachVipClient {
    /// Create a client for `url`, which must be an absolute http(s) URL.
    pub fn new(url: impl Into<String>, client: HttpClient) -> Result<Self, ApiError> {
        let url = url.into();
        validate_endpoint(&url)?;
        Ok(Self { client, url })
    }

    /// Create a client for the public endpoint with default HTTP settings
    pub fn with_defaults() -> Result<Self, ApiError> {
        Self::new(BREACH_VIP_API_URL, HttpClient::new()?)
    }
}

fn validate_endpoint(url: &str) -> Result<(), ApiError> {
    let parsed = url::Url::parse(url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ApiError::InvalidUrl(format!(
            "unsupported scheme: {}",
            scheme
        ))),
    }
}

#[async_trait]
impl SearchApi for BreachVipClient {
    fn id(&self) -> &str {
        "breach.vip"
    }

    fn endpoint(&self) -> &str {
        &self.url
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<u8>, ApiError> {
        let body = request.to_json()?;
        tracing::debug!(
            url = %self.url,
            body = %String::from_utf8_lossy(&body),
            "Sending search request"
        );

        let response = self
            .client
            .client()
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to send search request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response body: {}", e)))?;

        tracing::debug!(bytes = bytes.len(), "Received search response");
        Ok(bytes.to_vec())
    }
}
