//! Session Integration Tests
//!
//! Configuration file -> chain -> session, as the binary wires it.

use code_intel::{build_chain, AnalysisMode, AnalysisSession, ConfigService, SettingsUpdate};
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn session_from_config_file(server: &MockServer) -> (AnalysisSession, tempfile::TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut service = ConfigService::open(temp_dir.path().join("config.json")).unwrap();
    service
        .update_config(SettingsUpdate {
            api_key: Some("file-key".to_string()),
            base_url: Some(format!("{}/v1beta/models", server.uri())),
            models: Some(vec!["only".to_string()]),
            response_language: Some("Russian".to_string()),
            ..Default::default()
        })
        .unwrap();

    let chain = build_chain(service.get_config()).unwrap();
    (AnalysisSession::new(chain), temp_dir)
}

#[tokio::test]
async fn test_blank_input_never_reaches_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (session, _dir) = session_from_config_file(&server).await;

    assert!(session.analyze("  \n", "explain").await.is_none());
    server.verify().await;
}

#[tokio::test]
async fn test_session_caches_latest_result_per_mode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "Привет"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (session, _dir) = session_from_config_file(&server).await;
    let result = session.analyze("print(1)", "bugs").await.unwrap();

    assert_eq!(result.source_model.as_deref(), Some("only"));
    assert_eq!(
        session.result(AnalysisMode::FindIssues).await,
        Some(result)
    );

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(text.contains("Answer in Russian."));
    server.verify().await;
}
