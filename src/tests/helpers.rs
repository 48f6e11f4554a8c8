//! Test helper utilities
//!
//! Fixtures shared by the unit tests: a factory that hands out
//! `MockCompletionAdapter`s driven by a responder closure, and canned
//! provider answers.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

#![allow(dead_code)]

use crate::config::{AnalysisSettings, Credential};
use crate::error::FinePrintResult;
use crate::gateway::AnalysisGateway;
use crate::providers::{AdapterFactory, CompletionAdapter, CompletionRequest, MockCompletionAdapter};
use crate::registry::{ProviderDescriptor, ProviderRegistry};
use crate::FinePrintAnalyzer;
use std::sync::{Arc, Mutex};

type Responder =
    dyn Fn(&ProviderDescriptor, &CompletionRequest) -> FinePrintResult<String> + Send + Sync;

/// One call observed by a [`MockAdapterFactory`] adapter.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub provider_label: String,
    pub credential: String,
    pub request: CompletionRequest,
}

/// Builds mock adapters that answer through a shared responder and record
/// every request they receive.
#[derive(Clone)]
pub struct MockAdapterFactory {
    responder: Arc<Responder>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockAdapterFactory {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&ProviderDescriptor, &CompletionRequest) -> FinePrintResult<String>
            + Send
            + Sync
            + 'static,
    {
        Self {
            responder: Arc::new(responder),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every call answers with the same text.
    pub fn answering(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_, _| Ok(text.clone()))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl AdapterFactory for MockAdapterFactory {
    fn build(
        &self,
        descriptor: &ProviderDescriptor,
        credential: &Credential,
    ) -> FinePrintResult<Arc<dyn CompletionAdapter>> {
        let mut adapter = MockCompletionAdapter::new();

        let responder = Arc::clone(&self.responder);
        let calls = Arc::clone(&self.calls);
        let owned_descriptor = descriptor.clone();
        let secret = credential.expose().to_string();
        adapter.expect_complete().returning(move |request| {
            calls.lock().unwrap().push(RecordedCall {
                provider_label: owned_descriptor.label.clone(),
                credential: secret.clone(),
                request: request.clone(),
            });
            responder(&owned_descriptor, request)
        });
        adapter.expect_kind().return_const(descriptor.adapter);

        Ok(Arc::new(adapter))
    }
}

/// Gateway over the built-in registry with mock adapters.
pub fn mock_gateway(factory: &MockAdapterFactory) -> AnalysisGateway {
    AnalysisGateway::new(
        Arc::new(ProviderRegistry::default()),
        Arc::new(factory.clone()),
    )
}

/// Analyzer with default settings over mock adapters.
pub fn mock_analyzer(factory: &MockAdapterFactory) -> FinePrintAnalyzer {
    FinePrintAnalyzer::new(mock_gateway(factory), AnalysisSettings::default())
}

/// Whether a prompt is the JSON scoring prompt rather than the long-form one.
pub fn is_scoring_prompt(request: &CompletionRequest) -> bool {
    request.user_prompt.contains("Return ONLY a valid JSON object")
}

/// A well-formed scoring answer with the given verdict.
pub fn score_json(verdict: &str) -> String {
    serde_json::json!({
        "overall_risk": "HIGH",
        "hidden_fees": {"risk": "MEDIUM", "count": 3, "worst": "Penalty APR applies indefinitely"},
        "arbitration": {"risk": "CRITICAL", "can_sue": false, "class_action_waiver": true},
        "variable_rates": {"risk": "HIGH", "is_variable": true, "can_change_anytime": true},
        "privacy": {"risk": "HIGH", "sells_data": true, "opt_out_available": true},
        "one_line_verdict": verdict
    })
    .to_string()
}

pub const SAMPLE_REPORT: &str = "# RISK SCORECARD\n\n**Overall Risk Level:** HIGH\n\n## TOP 3 RED FLAGS\n1. Binding arbitration";
