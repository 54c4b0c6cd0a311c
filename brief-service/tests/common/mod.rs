//! Shared helpers for brief-service integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use brief_service::config::{AccessConfig, BriefConfig};
use brief_service::services::providers::CompletionProvider;
use brief_service::startup::build_router;
use brief_service::AppState;
use http_body_util::BodyExt;
use secrecy::Secret;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TEST_ACCESS_CODE: &str = "test-access-code";

pub const QUESTION_PATH: &str = "/api/generate-question";
pub const REPORT_PATH: &str = "/api/generate-report";
pub const AIRPORT_REPORT_PATH: &str = "/api/generate-airport-report";

pub const ALL_PATHS: [&str; 3] = [QUESTION_PATH, REPORT_PATH, AIRPORT_REPORT_PATH];

/// Config with the test access code and no environment involvement.
pub fn test_config() -> BriefConfig {
    BriefConfig {
        access: AccessConfig {
            access_code: Some(Secret::new(TEST_ACCESS_CODE.to_string())),
        },
        ..Default::default()
    }
}

pub fn router_with(config: BriefConfig, provider: Arc<dyn CompletionProvider>) -> Router {
    build_router(AppState::new(config, provider))
}

/// The Denver T3 brief with a valid access code.
pub fn denver_brief() -> Value {
    json!({
        "accessCode": TEST_ACCESS_CODE,
        "projectName": "T3",
        "typology": "Concourse B",
        "location": "Denver, continental climate",
        "users": "departing passengers",
        "goals": "reduce dwell-to-gate time"
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("Response body is not JSON")
    }
}

pub async fn send(app: Router, method: &str, path: &str, body: Body) -> TestResponse {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn post_json(app: Router, path: &str, body: &Value) -> TestResponse {
    send(app, "POST", path, Body::from(body.to_string())).await
}
