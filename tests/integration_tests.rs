//! Integration tests for Breach Search
//!
//! These tests drive a full search run against a local mock HTTP server.

use breach_search::api::{ApiError, BreachVipClient};
use breach_search::config::Config;
use breach_search::models::SearchRequest;
use breach_search::runner::{RunError, SearchRunner};
use breach_search::utils::{HttpClient, ParseError};
use mockito::Matcher;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Build a runner pointed at `server`, writing into `dir`
fn runner_for(server: &mockito::ServerGuard, dir: &Path) -> SearchRunner {
    let mut config = Config::default();
    config.api.url = format!("{}/api/search", server.url());
    config.output.path = dir.join("output.json");

    let api = BreachVipClient::new(config.api.url.clone(), HttpClient::new().unwrap()).unwrap();
    SearchRunner::from_config(Arc::new(api), &config).unwrap()
}

#[tokio::test]
async fn test_full_search_run() {
    let mut server = mockito::Server::new_async().await;
    let body = serde_json::json!({
        "results": [
            {"email": "a@x.com", "password": "p1", "domain": "x.com"},
            {"email": ["b@x.com", "c@x.com"], "password": ["p2", 42]},
            {"email": null},
            "garbage"
        ]
    })
    .to_string();

    let mock = server
        .mock("POST", "/api/search")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "term": "x.com",
            "fields": ["domain", "email"],
            "categories": ["minecraft"],
            "wildcard": true
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(&body)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let runner = runner_for(&server, dir.path());
    let request =
        SearchRequest::build("x.com", "Domain, EMAIL", " Minecraft ", Some(true), None).unwrap();

    let summary = runner.run(&request).await.unwrap();
    mock.assert_async().await;

    assert_eq!(summary.total, 4);
    assert_eq!(summary.emails, 3);
    assert_eq!(summary.passwords, 2);
    assert_eq!(summary.max_results, 10_000);

    assert_eq!(
        fs::read_to_string(dir.path().join("output.json")).unwrap(),
        body
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("emails_output.json")).unwrap(),
        "a@x.com\nb@x.com\nc@x.com"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("passwords_output.json")).unwrap(),
        "p1\np2"
    );
    assert_eq!(
        summary.email_path.as_deref(),
        Some(dir.path().join("emails_output.json").as_path())
    );
}

#[tokio::test]
async fn test_error_payload_is_saved_then_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/search")
        .with_status(200)
        .with_body(r#"{"error": "invalid term"}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let runner = runner_for(&server, dir.path());
    let request = SearchRequest::build("x", "email", "", None, None).unwrap();

    let err = runner.run(&request).await.unwrap_err();

    assert!(matches!(
        err,
        RunError::Parse {
            source: ParseError::MissingResultsArray,
            ..
        }
    ));
    assert_eq!(
        fs::read_to_string(dir.path().join("output.json")).unwrap(),
        r#"{"error": "invalid term"}"#
    );
    assert!(!dir.path().join("emails_output.json").exists());
}

#[tokio::test]
async fn test_truncated_response_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/search")
        .with_status(200)
        .with_body(r#"{"results": [{"email": "a@"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let runner = runner_for(&server, dir.path());
    let request = SearchRequest::build("x", "email", "", None, None).unwrap();

    let err = runner.run(&request).await.unwrap_err();

    assert!(matches!(
        err,
        RunError::Parse {
            source: ParseError::MalformedJson(_),
            ..
        }
    ));
    assert!(dir.path().join("output.json").exists());
}

#[tokio::test]
async fn test_http_error_status_writes_nothing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/search")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let runner = runner_for(&server, dir.path());
    let request = SearchRequest::build("x", "email", "", None, None).unwrap();

    let err = runner.run(&request).await.unwrap_err();

    match err {
        RunError::Api(ApiError::Status { code, .. }) => assert_eq!(code, 503),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!dir.path().join("output.json").exists());
}

#[tokio::test]
async fn test_unset_flags_not_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/search")
        .match_body(Matcher::Json(serde_json::json!({
            "term": "example.com",
            "fields": ["domain"]
        })))
        .with_status(200)
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let runner = runner_for(&server, dir.path());
    let request = SearchRequest::build("example.com", "domain", "", None, None).unwrap();

    let summary = runner.run(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(summary.total, 0);
    assert!(summary.email_path.is_none());
    assert!(summary.password_path.is_none());
}
