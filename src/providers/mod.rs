//! Provider adapters
//!
//! Every remote API is wrapped in a [`CompletionAdapter`]: one request shape
//! in, one string out. The gateway never looks at which adapter it holds.
//!
//! ```text
//! http.rs                  <- shared POST + status/error mapping
//!    |          |          |
//! openai_compatible/  gemini/  anthropic/   <- one adapter per API shape
//! ```
//!
//! Adding a provider means adding an [`AdapterKind`] arm to
//! [`HttpAdapterFactory`] and a registry entry.

pub mod anthropic;
pub mod gemini;
pub mod http;
pub mod openai_compatible;

use crate::config::Credential;
use crate::error::FinePrintResult;
use crate::logging::log_debug;
use crate::registry::{AdapterKind, ProviderDescriptor};
use async_trait::async_trait;
use std::sync::Arc;

pub use anthropic::AnthropicAdapter;
pub use gemini::GeminiAdapter;
pub use http::ProviderHttpClient;
pub use openai_compatible::OpenAiCompatibleAdapter;

/// Uniform input to every adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model_id: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
}

/// One remote completion API.
///
/// Implementations return the provider's primary response text and surface
/// transport, authentication and rate-limit failures unchanged. No retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionAdapter: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> FinePrintResult<String>;

    /// API shape this adapter speaks.
    fn kind(&self) -> AdapterKind;
}

/// Builds the adapter for a descriptor.
///
/// The seam the gateway dispatches through; tests swap in factories that hand
/// out mock adapters.
pub trait AdapterFactory: Send + Sync {
    fn build(
        &self,
        descriptor: &ProviderDescriptor,
        credential: &Credential,
    ) -> FinePrintResult<Arc<dyn CompletionAdapter>>;
}

/// Production factory: real HTTP adapters sharing one connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpAdapterFactory {
    client: reqwest::Client,
}

impl HttpAdapterFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxy settings, custom TLS roots).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl AdapterFactory for HttpAdapterFactory {
    fn build(
        &self,
        descriptor: &ProviderDescriptor,
        credential: &Credential,
    ) -> FinePrintResult<Arc<dyn CompletionAdapter>> {
        log_debug!(
            provider = %descriptor.label,
            adapter = %descriptor.adapter,
            base_url = %descriptor.base_url,
            "Building provider adapter"
        );

        let http = ProviderHttpClient::new(self.client.clone(), descriptor.label.clone());
        let adapter: Arc<dyn CompletionAdapter> = match descriptor.adapter {
            AdapterKind::OpenAiCompatible => Arc::new(OpenAiCompatibleAdapter::new(
                http,
                &descriptor.base_url,
                credential,
            )?),
            AdapterKind::Gemini => {
                Arc::new(GeminiAdapter::new(http, &descriptor.base_url, credential)?)
            }
            AdapterKind::Anthropic => {
                Arc::new(AnthropicAdapter::new(http, &descriptor.base_url, credential)?)
            }
        };

        Ok(adapter)
    }
}
