//! tests/global_errors/not_found.rs
//! Ensures that hitting an unknown route returns HTTP 404.

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::common::{self, InMemoryCompanyRepository};

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app(InMemoryCompanyRepository::new(vec![])).await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json, json!({ "error": "Not Found" }));
}

#[tokio::test]
async fn unsupported_method_on_known_route_is_405() {
    let base_url: String = common::spawn_app(InMemoryCompanyRepository::new(vec![])).await;

    let resp: reqwest::Response = reqwest::Client::new()
        .delete(format!("{}/api/company", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
