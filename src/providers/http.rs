//! Shared HTTP plumbing for provider adapters
//!
//! One POST helper and one status-to-error mapping, so every adapter reports
//! authentication, rate-limit and transport failures the same way.

use crate::config::Credential;
use crate::error::{FinePrintError, FinePrintResult};
use crate::logging::{log_debug, log_error};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;

/// Fallback wait when a 429 carries no usable `retry-after`.
pub const DEFAULT_RETRY_AFTER_SECONDS: u64 = 60;

/// POST-and-decode client bound to one provider label.
#[derive(Debug, Clone)]
pub struct ProviderHttpClient {
    client: reqwest::Client,
    provider: String,
}

impl ProviderHttpClient {
    pub fn new(client: reqwest::Client, provider: impl Into<String>) -> Self {
        Self {
            client,
            provider: provider.into(),
        }
    }

    /// Label used in errors and log fields.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Send `body` as JSON and decode a JSON response.
    ///
    /// # Errors
    ///
    /// - [`FinePrintError::RequestFailed`] for transport failures and
    ///   unexpected statuses
    /// - [`FinePrintError::AuthenticationFailed`] for rejected credentials
    /// - [`FinePrintError::RateLimitExceeded`] for 429
    /// - [`FinePrintError::ResponseParsing`] when the body is not the
    ///   expected envelope
    pub async fn post_json<Req, Resp>(
        &self,
        url: &str,
        headers: &HeaderMap,
        body: &Req,
    ) -> FinePrintResult<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let start = Instant::now();
        let response = self
            .client
            .post(url)
            .headers(headers.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                log_error!(
                    provider = %self.provider,
                    url = %url,
                    error = %e,
                    "HTTP request failed"
                );
                FinePrintError::request_failed(
                    &self.provider,
                    format!("Request failed: {e}"),
                    Some(Box::new(e)),
                )
            })?;

        log_debug!(
            provider = %self.provider,
            status = %response.status(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Provider responded"
        );

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        self.parse_success_response(response).await
    }

    /// Map a non-2xx response to an error.
    async fn handle_error_response(&self, response: reqwest::Response) -> FinePrintError {
        let status = response.status();
        let retry_after = extract_retry_after(response.headers());
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        log_error!(
            provider = %self.provider,
            status = %status,
            error_text = %error_text,
            "Provider API error response"
        );

        let detail = error_message(&error_text).unwrap_or_else(|| error_text.clone());

        match status.as_u16() {
            401 | 403 => FinePrintError::authentication_failed(&self.provider, detail),
            // Gemini reports a bad key as 400 INVALID_ARGUMENT
            400 if error_text.contains("API_KEY_INVALID") => {
                FinePrintError::authentication_failed(&self.provider, detail)
            }
            429 => FinePrintError::rate_limit_exceeded(&self.provider, retry_after),
            _ => FinePrintError::request_failed(
                &self.provider,
                format!("API error {status}: {detail}"),
                None,
            ),
        }
    }

    async fn parse_success_response<Resp: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> FinePrintResult<Resp> {
        let raw_body = response.text().await.map_err(|e| {
            log_error!(
                provider = %self.provider,
                error = %e,
                "Failed to read response body"
            );
            FinePrintError::response_parsing(&self.provider, format!("Failed to read response: {e}"))
        })?;

        serde_json::from_str(&raw_body).map_err(|e| {
            log_error!(
                provider = %self.provider,
                error = %e,
                body_length = raw_body.len(),
                "Failed to decode response body"
            );
            FinePrintError::response_parsing(&self.provider, format!("Invalid response: {e}"))
        })
    }
}

/// `Content-Type: application/json` plus nothing else.
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Insert a secret header, rejecting credentials that are not valid header text.
pub fn insert_secret_header(
    headers: &mut HeaderMap,
    name: HeaderName,
    value: &str,
) -> FinePrintResult<()> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|e| FinePrintError::configuration(format!("Invalid API key format: {e}")))?;
    header.set_sensitive(true);
    headers.insert(name, header);
    Ok(())
}

/// Headers for APIs that take `Authorization: Bearer <key>`.
pub fn bearer_headers(credential: &Credential) -> FinePrintResult<HeaderMap> {
    let mut headers = json_headers();
    insert_secret_header(
        &mut headers,
        reqwest::header::AUTHORIZATION,
        &format!("Bearer {}", credential.expose()),
    )?;
    Ok(headers)
}

/// Seconds from a `retry-after` header, or the default.
pub fn extract_retry_after(headers: &HeaderMap) -> u64 {
    headers
        .get("retry-after")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECONDS)
}

/// `error.message` from a provider error body, when present.
///
/// All three APIs nest their message there.
pub fn error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Join a base URL and a path without doubling the slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
