//! Wire-level tests for the Ollama client against a mock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gitscribe::config::InferenceConfig;
use gitscribe::error::InferenceError;
use gitscribe::ollama::{InferenceClient, OllamaClient};

fn config_for(server: &MockServer) -> InferenceConfig {
    InferenceConfig {
        endpoint: format!("{}/api/generate", server.uri()),
        model: "test-model".to_string(),
        timeout: Duration::from_secs(5),
        ..InferenceConfig::default()
    }
}

#[tokio::test]
async fn generate_returns_the_response_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "stream": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "test-model",
            "response": "feat: add login endpoint",
            "done": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OllamaClient::new(config_for(&server)).unwrap();
    let text = client.generate("some prompt").await.unwrap();

    assert_eq!(text, "feat: add login endpoint");
}

#[tokio::test]
async fn generate_sends_the_prompt_and_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({
            "prompt": "describe this diff",
            "options": { "num_predict": 200 },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = OllamaClient::new(config_for(&server)).unwrap();
    client.generate("describe this diff").await.unwrap();
}

#[tokio::test]
async fn missing_response_field_is_an_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
        .mount(&server)
        .await;

    let client = OllamaClient::new(config_for(&server)).unwrap();
    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, InferenceError::EmptyResponse));
}

#[tokio::test]
async fn null_response_field_is_an_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": null})))
        .mount(&server)
        .await;

    let client = OllamaClient::new(config_for(&server)).unwrap();
    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, InferenceError::EmptyResponse));
}

#[tokio::test]
async fn blank_response_field_is_an_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "  \n"})))
        .mount(&server)
        .await;

    let client = OllamaClient::new(config_for(&server)).unwrap();
    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, InferenceError::EmptyResponse));
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;

    let client = OllamaClient::new(config_for(&server)).unwrap();
    let err = client.generate("prompt").await.unwrap_err();

    let InferenceError::BadStatus { status, body } = err else {
        panic!("expected BadStatus, got: {err:?}");
    };
    assert_eq!(status, 500);
    assert_eq!(body, "model not loaded");
}

#[tokio::test]
async fn refused_connection_is_unreachable() {
    // Port 1 is never listening
    let config = InferenceConfig {
        endpoint: "http://127.0.0.1:1/api/generate".to_string(),
        timeout: Duration::from_secs(2),
        ..InferenceConfig::default()
    };

    let client = OllamaClient::new(config).unwrap();
    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, InferenceError::Unreachable { .. }));
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = OllamaClient::new(config_for(&server)).unwrap();
    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, InferenceError::DecodeFailed(_)));
}
