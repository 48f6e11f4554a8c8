//! Unit tests for the OpenAI-compatible adapter's wire mapping
//!
//! HTTP round trips live in tests/provider_http_integration_tests.rs.

use super::types::ChatResponse;
use super::OpenAiCompatibleAdapter;
use crate::providers::CompletionRequest;
use serde_json::json;

fn sample_request() -> CompletionRequest {
    CompletionRequest {
        model_id: "llama-3.3-70b-versatile".to_string(),
        system_prompt: "You are an attorney.".to_string(),
        user_prompt: "Review this.".to_string(),
        max_tokens: 800,
    }
}

#[test]
fn test_request_puts_system_prompt_first() {
    let request = sample_request();
    let body = serde_json::to_value(OpenAiCompatibleAdapter::build_request(&request)).unwrap();

    assert_eq!(
        body,
        json!({
            "model": "llama-3.3-70b-versatile",
            "messages": [
                {"role": "system", "content": "You are an attorney."},
                {"role": "user", "content": "Review this."}
            ],
            "max_tokens": 800
        })
    );
}

#[test]
fn test_response_text_comes_from_first_choice() {
    let response: ChatResponse = serde_json::from_value(json!({
        "id": "chatcmpl-1",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "first"}, "finish_reason": "stop"},
            {"index": 1, "message": {"role": "assistant", "content": "second"}, "finish_reason": "stop"}
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
    }))
    .unwrap();

    assert_eq!(response.into_text().as_deref(), Some("first"));
}

#[test]
fn test_response_without_choices_has_no_text() {
    let response: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();
    assert!(response.into_text().is_none());
}

#[test]
fn test_null_content_has_no_text() {
    let response: ChatResponse = serde_json::from_value(json!({
        "choices": [{"message": {"role": "assistant", "content": null}}]
    }))
    .unwrap();
    assert!(response.into_text().is_none());
}
