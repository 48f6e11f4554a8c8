//! Anthropic adapter implementation

use super::types::{Message, MessagesRequest, MessagesResponse};
use crate::config::Credential;
use crate::error::{FinePrintError, FinePrintResult};
use crate::logging::log_debug;
use crate::providers::http::{endpoint, insert_secret_header, json_headers, ProviderHttpClient};
use crate::providers::{CompletionAdapter, CompletionRequest};
use crate::registry::AdapterKind;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

const MESSAGES_PATH: &str = "/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// Adapter for the Anthropic Messages API
#[derive(Debug)]
pub struct AnthropicAdapter {
    http: ProviderHttpClient,
    url: String,
    headers: HeaderMap,
}

impl AnthropicAdapter {
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
            HeaderName::from_static("x-api-key"),
            credential.expose(),
        )?;
        headers.insert(
            HeaderName::from_static("anthropic-version"),
            HeaderValue::from_static(API_VERSION),
        );

        Ok(Self {
            http,
            url: endpoint(base_url, MESSAGES_PATH),
            headers,
        })
    }

    pub(super) fn build_request<'a>(request: &'a CompletionRequest) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &request.model_id,
            max_tokens: request.max_tokens,
            system: &request.system_prompt,
            messages: vec![Message {
                role: "user",
                content: &request.user_prompt,
            }],
        }
    }

    #[cfg(test)]
    pub(super) fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[async_trait]
impl CompletionAdapter for AnthropicAdapter {
    async fn complete(&self, request: &CompletionRequest) -> FinePrintResult<String> {
        let body = Self::build_request(request);
        let response: MessagesResponse =
            self.http.post_json(&self.url, &self.headers, &body).await?;

        if let Some(usage) = &response.usage {
            log_debug!(
                provider = self.http.provider(),
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                stop_reason = response.stop_reason.as_deref().unwrap_or("unknown"),
                "Anthropic message usage"
            );
        }

        response.into_text().ok_or_else(|| {
            FinePrintError::response_parsing(
                self.http.provider(),
                "Response contained no text block",
            )
        })
    }

    fn kind(&self) -> AdapterKind {
        AdapterKind::Anthropic
    }
}
