//! Google Gemini adapter
//!
//! Speaks `POST /v1beta/models/{model}:generateContent`. The key travels in
//! the `x-goog-api-key` header rather than the query string so it never
//! appears in logged URLs.

mod types;

#[cfg(test)]
mod tests;

use super::http::{endpoint, insert_secret_header, json_headers, ProviderHttpClient};
use super::{CompletionAdapter, CompletionRequest};
use crate::config::Credential;
use crate::error::{FinePrintError, FinePrintResult};
use crate::logging::log_debug;
use crate::registry::AdapterKind;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName};
use types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Adapter for the Gemini generative language API.
#[derive(Debug)]
pub struct GeminiAdapter {
    http: ProviderHttpClient,
    base_url: String,
    headers: HeaderMap,
}

impl GeminiAdapter {
    /// # Errors
    ///
    /// Returns [`FinePrintError::Configuration`] if the credential cannot be
    /// sent as a header.
    pub fn new(
        http: ProviderHttpClient,
        base_url: &str,
        credential: &Credential,
    ) -> FinePrintResult<Self> {
        let mut headers = json_headers();
        insert_secret_header(
            &mut headers,
            HeaderName::from_static(API_KEY_HEADER),
            credential.expose(),
        )?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
            headers,
        })
    }

    fn url_for(&self, model_id: &str) -> String {
        endpoint(
            &self.base_url,
            &format!("/v1beta/models/{model_id}:generateContent"),
        )
    }

    fn build_request<'a>(request: &'a CompletionRequest) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &request.system_prompt,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.user_prompt,
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: request.max_tokens,
            },
        }
    }
}

#[async_trait]
impl CompletionAdapter for GeminiAdapter {
    async fn complete(&self, request: &CompletionRequest) -> FinePrintResult<String> {
        let url = self.url_for(&request.model_id);
        let body = Self::build_request(request);
        let response: GenerateContentResponse =
            self.http.post_json(&url, &self.headers, &body).await?;

        if let Some(usage) = &response.usage_metadata {
            log_debug!(
                provider = self.http.provider(),
                prompt_tokens = usage.prompt_token_count,
                completion_tokens = usage.candidates_token_count,
                finish_reason = response
                    .candidates
                    .first()
                    .and_then(|c| c.finish_reason.as_deref())
                    .unwrap_or("unknown"),
                "Gemini generation usage"
            );
        }

        response.text().ok_or_else(|| {
            let message = match response.block_reason() {
                Some(reason) => format!("Prompt was blocked: {reason}"),
                None => "Response contained no candidate text".to_string(),
            };
            FinePrintError::response_parsing(self.http.provider(), message)
        })
    }

    fn kind(&self) -> AdapterKind {
        AdapterKind::Gemini
    }
}
