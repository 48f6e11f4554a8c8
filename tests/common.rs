//! Test helper utilities for fineprint integration tests
//!
//! Provider fixtures pointed at a wiremock server and canned response
//! bodies in each API's wire format.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use fineprint::{
    AnalysisGateway, AnalysisSettings, FinePrintAnalyzer, HttpAdapterFactory, ProviderDescriptor,
    ProviderRegistry,
};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::Arc;
use wiremock::MockServer;

pub const GROQ: &str = "Groq (Free)";
pub const GEMINI: &str = "Google Gemini (Free)";
pub const CLAUDE: &str = "Anthropic Claude";

/// Built-in descriptors with every base URL pointed at `base_url`.
pub fn registry_at(base_url: &str) -> ProviderRegistry {
    let descriptors: Vec<ProviderDescriptor> = ProviderRegistry::builtin()
        .descriptors()
        .iter()
        .cloned()
        .map(|d| d.with_base_url(base_url))
        .collect();

    ProviderRegistry::new(descriptors).expect("built-in descriptors are valid")
}

/// Built-in descriptors with every base URL pointed at the mock server.
pub fn registry_for(server: &MockServer) -> ProviderRegistry {
    registry_at(&server.uri())
}

/// Loopback URL on a port nothing listens on.
///
/// Binds an ephemeral port and releases it. Pooled wiremock servers keep
/// listening after drop, so they cannot stand in for a dead endpoint.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("listener address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Gateway with real HTTP adapters talking to the mock server.
pub fn gateway_for(server: &MockServer) -> AnalysisGateway {
    AnalysisGateway::new(
        Arc::new(registry_for(server)),
        Arc::new(HttpAdapterFactory::new()),
    )
}

/// Analyzer with default limits talking to the mock server.
pub fn analyzer_for(server: &MockServer) -> FinePrintAnalyzer {
    FinePrintAnalyzer::new(gateway_for(server), AnalysisSettings::default())
}

/// `/v1/chat/completions` success body.
pub fn openai_chat_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160}
    })
}

/// `generateContent` success body.
pub fn gemini_body(content: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": content}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 40}
    })
}

/// Messages API success body.
pub fn anthropic_body(content: &str) -> Value {
    json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-20250514",
        "content": [{"type": "text", "text": content}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 120, "output_tokens": 40}
    })
}

/// Error envelope shared by all three APIs.
pub fn error_body(message: &str) -> Value {
    json!({"error": {"message": message, "type": "error"}})
}

/// A complete, valid scoring answer.
pub fn score_json(verdict: &str) -> String {
    json!({
        "overall_risk": "CRITICAL",
        "hidden_fees": {"risk": "HIGH", "count": 4, "worst": "Penalty APR applies indefinitely"},
        "arbitration": {"risk": "CRITICAL", "can_sue": false, "class_action_waiver": true},
        "variable_rates": {"risk": "HIGH", "is_variable": true, "can_change_anytime": true},
        "privacy": {"risk": "HIGH", "sells_data": "unclear", "opt_out_available": true},
        "one_line_verdict": verdict
    })
    .to_string()
}
