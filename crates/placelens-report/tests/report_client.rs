//! Integration tests for `ReportClient` against a wiremock completion API.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use placelens_report::{ReportClient, ReportError, Tier};

fn test_client(base_url: &str) -> ReportClient {
    ReportClient::new(base_url, "sk-test", "test-model", 5).expect("failed to build ReportClient")
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
}

#[tokio::test]
async fn generate_returns_trimmed_message_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({"model": "test-model"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("  the report  ")))
        .mount(&server)
        .await;

    let report = test_client(&server.uri())
        .generate(Tier::Free, "prompt text")
        .await
        .expect("generate");
    assert_eq!(report, "the report");
}

#[tokio::test]
async fn request_carries_system_and_user_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                {"role": "system", "content": Tier::Paid.system_instruction()},
                {"role": "user", "content": "filled prompt"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    test_client(&server.uri())
        .generate(Tier::Paid, "filled prompt")
        .await
        .expect("generate");
}

#[tokio::test]
async fn non_success_status_is_a_typed_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .generate(Tier::Free, "prompt")
        .await
        .expect_err("should fail");
    assert!(matches!(err, ReportError::Status { status: 429 }), "got: {err:?}");
}

#[tokio::test]
async fn empty_choices_is_a_shape_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .generate(Tier::Free, "prompt")
        .await
        .expect_err("should fail");
    assert!(matches!(err, ReportError::Shape { .. }), "got: {err:?}");
}

#[tokio::test]
async fn blank_content_is_a_shape_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("   ")))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .generate(Tier::Free, "prompt")
        .await
        .expect_err("should fail");
    assert!(matches!(err, ReportError::Shape { .. }), "got: {err:?}");
}
