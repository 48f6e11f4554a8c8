//! Analysis gateway
//!
//! Routes one completion call to the provider named by a label. Resolution
//! goes label → descriptor → adapter, so the gateway holds nothing mutable:
//! a registry shared read-only and a factory that builds adapters per call.

use crate::config::Credential;
use crate::error::{FinePrintError, FinePrintResult};
use crate::logging::{log_debug, log_info};
use crate::providers::{AdapterFactory, CompletionRequest, HttpAdapterFactory};
use crate::registry::ProviderRegistry;
use std::sync::Arc;
use std::time::Instant;

/// Dispatches completion calls to registered providers.
#[derive(Clone)]
pub struct AnalysisGateway {
    registry: Arc<ProviderRegistry>,
    factory: Arc<dyn AdapterFactory>,
}

impl std::fmt::Debug for AnalysisGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisGateway")
            .field("providers", &self.registry.labels().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Default for AnalysisGateway {
    fn default() -> Self {
        Self::new(
            Arc::new(ProviderRegistry::default()),
            Arc::new(HttpAdapterFactory::new()),
        )
    }
}

impl AnalysisGateway {
    pub fn new(registry: Arc<ProviderRegistry>, factory: Arc<dyn AdapterFactory>) -> Self {
        Self { registry, factory }
    }

    /// Given registry over real HTTP adapters.
    pub fn with_registry(registry: ProviderRegistry) -> Self {
        Self::new(Arc::new(registry), Arc::new(HttpAdapterFactory::new()))
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Send one system/user prompt pair to the labelled provider and return
    /// its response text.
    ///
    /// # Errors
    ///
    /// - [`FinePrintError::UnknownProvider`] if the label is not registered
    /// - [`FinePrintError::MissingCredential`] if the credential is blank,
    ///   before any network traffic
    /// - any provider error from the adapter, unchanged
    pub async fn invoke(
        &self,
        provider_label: &str,
        credential: &Credential,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> FinePrintResult<String> {
        let descriptor = self.registry.lookup(provider_label)?;

        if credential.is_empty() {
            return Err(FinePrintError::missing_credential(
                &descriptor.label,
                &descriptor.credential_env_var,
            ));
        }

        let adapter = self.factory.build(descriptor, credential)?;
        let request = CompletionRequest {
            model_id: descriptor.model_id.clone(),
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            max_tokens,
        };

        log_debug!(
            provider = %descriptor.label,
            adapter = %adapter.kind(),
            model = %descriptor.model_id,
            max_tokens = max_tokens,
            prompt_chars = user_prompt.chars().count(),
            "Invoking provider"
        );

        let start = Instant::now();
        let text = adapter.complete(&request).await?;

        log_info!(
            provider = %descriptor.label,
            model = %descriptor.model_id,
            response_chars = text.chars().count(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Provider call completed"
        );

        Ok(text)
    }
}
