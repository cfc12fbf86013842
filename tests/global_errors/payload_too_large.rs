//! tests/global_errors/payload_too_large.rs
//! Ensures that bodies above MAX_REQUEST_BODY_SIZE are rejected with 413.

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::common::{self, InMemoryCompanyRepository};

#[tokio::test]
async fn returns_413_when_body_exceeds_limit() {
    let base_url: String = common::spawn_app(InMemoryCompanyRepository::new(vec![])).await;

    // The test environment allows 1KB
    let body: String = "x".repeat(4 * 1024);

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api", base_url))
        .body(body)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json: Value = resp.json().await.expect("413 body was not JSON");
    assert_eq!(json, json!({ "error": "Payload Too Large" }));
}

#[tokio::test]
async fn accepts_body_within_limit() {
    let base_url: String = common::spawn_app(InMemoryCompanyRepository::new(vec![])).await;

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api", base_url))
        .body("x".repeat(512))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
}
