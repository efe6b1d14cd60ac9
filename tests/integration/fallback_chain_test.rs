//! Fallback Chain Integration Tests
//!
//! Each candidate is a distinct path on one mock server; the chain is built
//! from an `AppConfig` the same way the binary builds it.

use std::time::{Duration, Instant};

use code_intel::models::FAILURE_TITLE;
use code_intel::{build_chain, AnalysisMode, AppConfig, FailureReason};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, models: &[&str]) -> AppConfig {
    AppConfig {
        api_key: Some("integration-key".to_string()),
        base_url: format!("{}/v1beta/models", server.uri()),
        models: models.iter().map(|m| m.to_string()).collect(),
        attempt_timeout_ms: 300,
        ..Default::default()
    }
}

fn endpoint(model: &str) -> String {
    format!("/v1beta/models/{}:generateContent", model)
}

fn text_body(text: &str) -> serde_json::Value {
    json!({"candidates": [{"content": {"parts": [{"text": text}]}}]})
}

async fn mount(server: &MockServer, model: &str, response: ResponseTemplate, expected: u64) {
    Mock::given(method("POST"))
        .and(path(endpoint(model)))
        .respond_with(response)
        .expect(expected)
        .mount(server)
        .await;
}

// ============================================================================
// Success Paths
// ============================================================================

#[tokio::test]
async fn test_first_candidate_success_skips_the_rest() {
    let server = MockServer::start().await;
    mount(&server, "A", ResponseTemplate::new(200).set_body_json(text_body("fast answer")), 1).await;
    mount(&server, "B", ResponseTemplate::new(200).set_body_json(text_body("unused")), 0).await;

    let chain = build_chain(&config_for(&server, &["A", "B"])).unwrap();
    let result = chain.analyze("fn main() {}", "explain").await;

    assert_eq!(result.content, "fast answer");
    assert_eq!(result.source_model.as_deref(), Some("A"));
    server.verify().await;
}

#[tokio::test]
async fn test_rate_limit_then_timeout_then_success() {
    let server = MockServer::start().await;
    mount(
        &server,
        "A",
        ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })),
        1,
    )
    .await;
    mount(
        &server,
        "B",
        ResponseTemplate::new(200)
            .set_body_json(text_body("too late"))
            .set_delay(Duration::from_secs(10)),
        1,
    )
    .await;
    mount(&server, "C", ResponseTemplate::new(200).set_body_json(text_body("Result text")), 1).await;

    let chain = build_chain(&config_for(&server, &["A", "B", "C"])).unwrap();
    let started = Instant::now();
    let (result, log) = chain
        .analyze_with_log("let x = 1;", AnalysisMode::FindIssues)
        .await;

    assert_eq!(result.content, "Result text");
    assert_eq!(result.source_model.as_deref(), Some("C"));
    assert_eq!(result.title, "Security Analysis");
    assert_eq!(log.attempts.len(), 3);
    assert_eq!(log.attempts[0].failure_reason, Some(FailureReason::RateLimited));
    assert_eq!(log.attempts[1].failure_reason, Some(FailureReason::Timeout));
    assert!(log.attempts[2].success);
    assert!(started.elapsed() < Duration::from_secs(5));
    server.verify().await;
}

#[tokio::test]
async fn test_not_found_and_empty_fall_through() {
    let server = MockServer::start().await;
    mount(
        &server,
        "retired",
        ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": 404, "message": "model is not supported", "status": "NOT_FOUND"}
        })),
        1,
    )
    .await;
    mount(&server, "quiet", ResponseTemplate::new(200).set_body_json(json!({"candidates": []})), 1).await;
    mount(&server, "garbled", ResponseTemplate::new(200).set_body_string("<html>"), 1).await;
    mount(&server, "steady", ResponseTemplate::new(200).set_body_json(text_body("## Plan")), 1).await;

    let chain = build_chain(&config_for(&server, &["retired", "quiet", "garbled", "steady"])).unwrap();
    let (result, log) = chain.analyze_with_log("code", AnalysisMode::Refactor).await;

    assert_eq!(result.source_model.as_deref(), Some("steady"));
    let reasons: Vec<_> = log.attempts.iter().map(|a| a.failure_reason).collect();
    assert_eq!(
        reasons,
        vec![
            Some(FailureReason::NotFound),
            Some(FailureReason::Empty),
            Some(FailureReason::ServerError),
            None,
        ]
    );
    server.verify().await;
}

// ============================================================================
// Exhaustion
// ============================================================================

#[tokio::test]
async fn test_exhausted_chain_report_lists_each_model_once() {
    let server = MockServer::start().await;
    mount(
        &server,
        "alpha",
        ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": 500, "message": "Internal error encountered.", "status": "INTERNAL"}
        })),
        1,
    )
    .await;
    mount(&server, "bravo", ResponseTemplate::new(503).set_body_string("unavailable"), 1).await;
    mount(
        &server,
        "charlie",
        ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": 404,
                "message": "models/charlie is not found for API version v1beta, or is not supported for generateContent. Call ListModels to see the list of available models and their supported methods.",
                "status": "NOT_FOUND"
            }
        })),
        1,
    )
    .await;

    let chain = build_chain(&config_for(&server, &["alpha", "bravo", "charlie"])).unwrap();
    let result = chain.analyze("code", "explain").await;

    assert_eq!(result.title, FAILURE_TITLE);
    assert!(result.source_model.is_none());
    for model in ["alpha", "bravo", "charlie"] {
        assert_eq!(result.content.matches(model).count(), 1, "model {}", model);
    }
    let position = |model: &str| result.content.find(model).unwrap();
    assert!(position("alpha") < position("bravo"));
    assert!(position("bravo") < position("charlie"));
    assert!(result.content.contains("Internal error encountered."));
    assert!(result.content.contains("HTTP 503 Service Unavailable"));
    assert!(result.content.contains("this model is not found for API version v1beta"));
    assert!(result.content.contains("try again"));
    server.verify().await;
}

#[tokio::test]
async fn test_unknown_mode_sends_explain_prompt() {
    let server = MockServer::start().await;
    mount(&server, "A", ResponseTemplate::new(200).set_body_json(text_body("ok")), 1).await;

    let chain = build_chain(&config_for(&server, &["A"])).unwrap();
    let result = chain.analyze("code", "limerick").await;

    assert_eq!(result.title, AnalysisMode::Explain.title());
    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(text.contains("STEP BY STEP"));
    assert_eq!(
        requests[0].url.query(),
        Some("key=integration-key")
    );
}
