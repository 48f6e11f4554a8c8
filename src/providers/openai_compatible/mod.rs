//! OpenAI-compatible chat completions adapter
//!
//! Speaks `POST /v1/chat/completions` with bearer auth. Groq serves this API
//! under `https://api.groq.com/openai`.

mod types;

#[cfg(test)]
mod tests;

use super::http::{bearer_headers, endpoint, ProviderHttpClient};
use super::{CompletionAdapter, CompletionRequest};
use crate::config::Credential;
use crate::error::{FinePrintError, FinePrintResult};
use crate::logging::log_debug;
use crate::registry::AdapterKind;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use types::{ChatMessage, ChatRequest, ChatResponse};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Adapter for OpenAI-style chat completion APIs.
#[derive(Debug)]
pub struct OpenAiCompatibleAdapter {
    http: ProviderHttpClient,
    url: String,
    headers: HeaderMap,
}

impl OpenAiCompatibleAdapter {
    /// # Errors
    ///
    /// Returns [`FinePrintError::Configuration`] if the credential cannot be
    /// sent as a header.
    pub fn new(
        http: ProviderHttpClient,
        base_url: &str,
        credential: &Credential,
    ) -> FinePrintResult<Self> {
        Ok(Self {
            headers: bearer_headers(credential)?,
            url: endpoint(base_url, CHAT_COMPLETIONS_PATH),
            http,
        })
    }

    fn build_request<'a>(request: &'a CompletionRequest) -> ChatRequest<'a> {
        ChatRequest {
            model: &request.model_id,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionAdapter for OpenAiCompatibleAdapter {
    async fn complete(&self, request: &CompletionRequest) -> FinePrintResult<String> {
        let body = Self::build_request(request);
        let response: ChatResponse = self.http.post_json(&self.url, &self.headers, &body).await?;

        if let Some(usage) = &response.usage {
            log_debug!(
                provider = self.http.provider(),
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                finish_reason = response
                    .choices
                    .first()
                    .and_then(|c| c.finish_reason.as_deref())
                    .unwrap_or("unknown"),
                "Chat completion usage"
            );
        }

        response.into_text().ok_or_else(|| {
            FinePrintError::response_parsing(
                self.http.provider(),
                "Response contained no message content",
            )
        })
    }

    fn kind(&self) -> AdapterKind {
        AdapterKind::OpenAiCompatible
    }
}
