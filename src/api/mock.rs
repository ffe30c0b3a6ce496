//! Mock search API for testing purposes.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::api::{ApiError, SearchApi};
use crate::models::SearchRequest;

/// A mock API that returns a predefined response and records every request.
#[derive(Debug)]
pub struct MockApi {
    response: Mutex<Result<Vec<u8>, ApiError>>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::with_body(br#"{"results": []}"#.to_vec())
    }
}

impl MockApi {
    /// Create a mock answering with an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock answering with `body`.
    pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: Mutex::new(Ok(body.into())),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock failing every search with `error`.
    pub fn with_error(error: ApiError) -> Self {
        Self {
            response: Mutex::new(Err(error)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Replace the configured response body.
    pub fn set_body(&self, body: impl Into<Vec<u8>>) {
        let mut guard = self.response.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Ok(body.into());
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl SearchApi for MockApi {
    fn id(&self) -> &str {
        "mock"
    }

    fn endpoint(&self) -> &str {
        "mock://search"
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<u8>, ApiError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());
        self.response
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
