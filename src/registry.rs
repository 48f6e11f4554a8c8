//! Provider registry
//!
//! Static table of supported providers. A descriptor carries everything
//! needed to reach a provider: the model id, the environment variable the
//! credential lives in, the adapter that speaks its API and the base URL.
//! Dispatch goes through [`AdapterKind`], never through the label text, so a
//! label can be renamed without touching the gateway.

use crate::error::{FinePrintError, FinePrintResult};
use crate::logging::log_debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Label of the provider used when none is chosen.
pub const DEFAULT_PROVIDER_LABEL: &str = "Groq (Free)";

/// Which remote API shape a provider speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterKind {
    /// OpenAI-style `/v1/chat/completions` (Groq).
    OpenAiCompatible,
    /// Google `generateContent`.
    Gemini,
    /// Anthropic Messages API.
    Anthropic,
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterKind::OpenAiCompatible => write!(f, "openai_compatible"),
            AdapterKind::Gemini => write!(f, "gemini"),
            AdapterKind::Anthropic => write!(f, "anthropic"),
        }
    }
}

/// Connection parameters for one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    /// Human-readable label, unique within a registry.
    pub label: String,
    /// Environment variable holding the API key.
    pub credential_env_var: String,
    /// Model identifier sent to the provider.
    pub model_id: String,
    /// Short description shown in provider pickers.
    pub description: String,
    /// API shape used to talk to the provider.
    pub adapter: AdapterKind,
    /// Scheme and host of the API, without a trailing slash.
    pub base_url: String,
}

impl ProviderDescriptor {
    fn builtin(
        label: &str,
        credential_env_var: &str,
        model_id: &str,
        description: &str,
        adapter: AdapterKind,
        base_url: &str,
    ) -> Self {
        Self {
            label: label.to_string(),
            credential_env_var: credential_env_var.to_string(),
            model_id: model_id.to_string(),
            description: description.to_string(),
            adapter,
            base_url: base_url.to_string(),
        }
    }

    /// Same descriptor pointed at another host. Used for proxies and tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

static BUILTIN: Lazy<ProviderRegistry> = Lazy::new(|| ProviderRegistry {
    descriptors: vec![
        ProviderDescriptor::builtin(
            "Groq (Free)",
            "GROQ_API_KEY",
            "llama-3.3-70b-versatile",
            "Free tier, very fast. Uses Llama 3.3 70B.",
            AdapterKind::OpenAiCompatible,
            "https://api.groq.com/openai",
        ),
        ProviderDescriptor::builtin(
            "Google Gemini (Free)",
            "GEMINI_API_KEY",
            "gemini-2.0-flash",
            "Free tier with 60 req/min. Google AI.",
            AdapterKind::Gemini,
            "https://generativelanguage.googleapis.com",
        ),
        ProviderDescriptor::builtin(
            "Anthropic Claude",
            "ANTHROPIC_API_KEY",
            "claude-sonnet-4-20250514",
            "Paid API. High quality analysis.",
            AdapterKind::Anthropic,
            "https://api.anthropic.com",
        ),
    ],
});

/// Immutable set of providers, looked up by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRegistry {
    descriptors: Vec<ProviderDescriptor>,
}

impl ProviderRegistry {
    /// Build a registry from explicit descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`FinePrintError::Configuration`] if the list is empty, a label
    /// repeats, or a descriptor has an empty label, model id or env var.
    pub fn new(descriptors: Vec<ProviderDescriptor>) -> FinePrintResult<Self> {
        if descriptors.is_empty() {
            return Err(FinePrintError::configuration(
                "Provider registry needs at least one provider",
            ));
        }

        let mut seen = HashSet::new();
        for descriptor in &descriptors {
            if descriptor.label.trim().is_empty()
                || descriptor.model_id.trim().is_empty()
                || descriptor.credential_env_var.trim().is_empty()
            {
                return Err(FinePrintError::configuration(format!(
                    "Provider \"{}\" is missing a label, model id or credential variable",
                    descriptor.label
                )));
            }
            if !seen.insert(descriptor.label.as_str()) {
                return Err(FinePrintError::configuration(format!(
                    "Duplicate provider label: {}",
                    descriptor.label
                )));
            }
        }

        log_debug!(
            provider_count = descriptors.len(),
            "Provider registry created"
        );

        Ok(Self { descriptors })
    }

    /// The providers shipped with the crate.
    pub fn builtin() -> &'static ProviderRegistry {
        &BUILTIN
    }

    /// Resolve a label to its descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`FinePrintError::UnknownProvider`] if the label is not registered.
    pub fn lookup(&self, label: &str) -> FinePrintResult<&ProviderDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.label == label)
            .ok_or_else(|| FinePrintError::unknown_provider(label))
    }

    /// Labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.label.as_str())
    }

    /// [`DEFAULT_PROVIDER_LABEL`] when registered, otherwise the first label.
    pub fn default_label(&self) -> &str {
        self.labels()
            .find(|label| *label == DEFAULT_PROVIDER_LABEL)
            .or_else(|| self.labels().next())
            .unwrap_or(DEFAULT_PROVIDER_LABEL)
    }

    pub fn descriptors(&self) -> &[ProviderDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
