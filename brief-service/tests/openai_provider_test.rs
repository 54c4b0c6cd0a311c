//! OpenAI provider against a mock completion API.

mod common;

use axum::http::StatusCode;
use brief_service::config::{BriefConfig, OpenAiConfig};
use brief_service::services::providers::openai::OpenAiProvider;
use brief_service::services::providers::{CompletionProvider, CompletionRequest, ProviderError};
use common::*;
use secrecy::Secret;
use serde_json::json;
use std::sync::Arc;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn provider_for(server: &MockServer) -> OpenAiProvider {
    OpenAiProvider::new(&OpenAiConfig {
        api_key: Some(Secret::new("sk-test".to_string())),
        base_url: server.uri(),
        timeout_secs: Some(5),
    })
    .expect("Failed to build provider")
}

fn config_for(server: &MockServer) -> BriefConfig {
    let mut config = test_config();
    config.openai = OpenAiConfig {
        api_key: Some(Secret::new("sk-test".to_string())),
        base_url: server.uri(),
        timeout_secs: Some(5),
    };
    config
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn sends_two_messages_with_bearer_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "temperature": 0.3,
            "messages": [
                { "role": "system", "content": "system text" },
                { "role": "user", "content": "user text" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("hello")))
        .expect(1)
        .mount(&server)
        .await;

    let request =
        CompletionRequest::new("gpt-4o", "system text".into(), "user text".into(), 0.3);
    let text = provider_for(&server).complete(&request).await.unwrap();

    assert_eq!(text, "hello");
}

#[tokio::test]
async fn non_success_status_keeps_body_for_logs() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
        .mount(&server)
        .await;

    let request = CompletionRequest::new("gpt-4o", "s".into(), "u".into(), 0.3);
    let err = provider_for(&server).complete(&request).await.unwrap_err();

    match err {
        ProviderError::ApiError { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limit exceeded");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn unexpected_success_shape_yields_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let request = CompletionRequest::new("gpt-4o", "s".into(), "u".into(), 0.3);
    let text = provider_for(&server).complete(&request).await.unwrap();

    assert_eq!(text, "");
}

#[tokio::test]
async fn non_json_success_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let request = CompletionRequest::new("gpt-4o", "s".into(), "u".into(), 0.3);
    let err = provider_for(&server).complete(&request).await.unwrap_err();

    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn denver_scenario_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "model": "gpt-5.0" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("What is the target security wait time?")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let provider = Arc::new(OpenAiProvider::new(&config.openai).unwrap());
    let app = router_with(config, provider);

    let response = post_json(app, QUESTION_PATH, &denver_brief()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        r#"{"question":"What is the target security wait time?"}"#
    );
}

#[tokio::test]
async fn upstream_503_end_to_end_hides_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_string("Service Unavailable: model capacity exhausted"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let provider = Arc::new(OpenAiProvider::new(&config.openai).unwrap());
    let app = router_with(config, provider);

    let response = post_json(app, QUESTION_PATH, &denver_brief()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!response.body.contains("503"));
    assert!(!response.body.contains("capacity"));
    assert!(!response.body.contains("Service Unavailable"));
}

#[tokio::test]
async fn invalid_access_code_never_reaches_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let provider = Arc::new(OpenAiProvider::new(&config.openai).unwrap());
    let app = router_with(config, provider);

    let mut body = denver_brief();
    body["accessCode"] = json!("guess");
    let response = post_json(app, REPORT_PATH, &body).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
