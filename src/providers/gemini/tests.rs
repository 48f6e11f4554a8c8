use super::types::GenerateContentResponse;
use super::GeminiAdapter;
use crate::config::Credential;
use crate::providers::{CompletionRequest, ProviderHttpClient};
use serde_json::json;

fn adapter(base_url: &str) -> GeminiAdapter {
    let http = ProviderHttpClient::new(reqwest::Client::new(), "Google Gemini (Free)");
    GeminiAdapter::new(http, base_url, &Credential::new("gm-key")).unwrap()
}

#[test]
fn test_url_embeds_model_id() {
    let adapter = adapter("https://generativelanguage.googleapis.com/");
    assert_eq!(
        adapter.url_for("gemini-2.0-flash"),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
    );
}

#[test]
fn test_api_key_is_a_sensitive_header() {
    let adapter = adapter("https://generativelanguage.googleapis.com");
    let value = adapter.headers.get("x-goog-api-key").unwrap();
    assert_eq!(value.to_str().unwrap(), "gm-key");
    assert!(value.is_sensitive());
}

#[test]
fn test_request_separates_system_instruction() {
    let request = CompletionRequest {
        model_id: "gemini-2.0-flash".to_string(),
        system_prompt: "persona".to_string(),
        user_prompt: "document".to_string(),
        max_tokens: 4096,
    };
    let body = serde_json::to_value(GeminiAdapter::build_request(&request)).unwrap();

    assert_eq!(
        body,
        json!({
            "systemInstruction": {"parts": [{"text": "persona"}]},
            "contents": [{"role": "user", "parts": [{"text": "document"}]}],
            "generationConfig": {"maxOutputTokens": 4096}
        })
    );
}

#[test]
fn test_text_concatenates_parts_of_first_candidate() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": "Hello, "}, {"text": "world"}]}, "finishReason": "STOP"},
            {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
        ]
    }))
    .unwrap();

    assert_eq!(response.text().as_deref(), Some("Hello, world"));
}

#[test]
fn test_blocked_prompt_has_no_text_and_a_reason() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "promptFeedback": {"blockReason": "SAFETY"}
    }))
    .unwrap();

    assert!(response.text().is_none());
    assert_eq!(response.block_reason(), Some("SAFETY"));
}
