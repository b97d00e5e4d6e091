//! Tests for GeminiTipClient against a local mock server

use std::time::Duration;

use serde_json::json;
use shared::Locale;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::TipFetchError;
use crate::services::gemini_tip::GeminiTipClient;
use crate::traits::TipProvider;
use crate::types::TipRequest;

const TEST_MODEL: &str = "gemini-test";
const ENDPOINT: &str = "/v1beta/models/gemini-test:generateContent";

fn request() -> TipRequest {
    TipRequest {
        area: 10.0,
        total_units: 441,
        model_name: "Paver 16 Faces".to_string(),
        locale: Locale::PtBr,
    }
}

fn client_for(server: &MockServer) -> GeminiTipClient {
    GeminiTipClient::new(Some("test-key".to_string()))
        .with_model(TEST_MODEL)
        .with_base_url(server.uri())
}

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn test_returns_first_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("Compacte bem a base.")))
        .expect(1)
        .mount(&server)
        .await;

    let tip = client_for(&server).fetch_tip(&request()).await.unwrap();
    assert_eq!(tip, "Compacte bem a base.");
}

#[tokio::test]
async fn test_prompt_carries_quote_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("ok")))
        .mount(&server)
        .await;

    client_for(&server).fetch_tip(&request()).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("441"));
    assert!(prompt.contains("Paver 16 Faces"));
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 150);
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_tip(&request()).await.unwrap_err();
    assert_eq!(err, TipFetchError::Http { status: 500 });
}

#[tokio::test]
async fn test_empty_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_tip(&request()).await.unwrap_err();
    assert_eq!(err, TipFetchError::EmptyResponse);
}

#[tokio::test]
async fn test_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_tip(&request()).await.unwrap_err();
    assert!(matches!(err, TipFetchError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_missing_api_key_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let client = GeminiTipClient::new(Some("   ".to_string())).with_base_url(server.uri());
    assert!(!client.has_api_key());

    let err = client.fetch_tip(&request()).await.unwrap_err();
    assert_eq!(err, TipFetchError::MissingApiKey);
}

#[tokio::test]
async fn test_client_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate("late"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .with_timeout(Duration::from_millis(50))
        .fetch_tip(&request())
        .await
        .unwrap_err();
    assert!(matches!(err, TipFetchError::Timeout { .. }), "got {err:?}");
}
