//! Error types for contract analysis.
//!
//! Every failure the crate can surface is a [`FinePrintError`]. Variants are
//! grouped into categories so callers can decide what to show the user
//! without matching on every case:
//!
//! - Caller mistakes: unknown provider label, missing credential, empty or
//!   unsupported document, bad configuration
//! - Provider failures: transport errors, authentication, rate limiting and
//!   malformed provider envelopes (see [`FinePrintError::is_provider_error`])
//!
//! A scoring response that is not valid JSON is *not* an error. It is
//! absorbed into a "no result" value by [`crate::scoring::normalize_scores`].
//!
//! # Example
//!
//! ```rust
//! use fineprint::{FinePrintError, error::ErrorCategory};
//!
//! fn explain(err: &FinePrintError) -> String {
//!     match err.category() {
//!         ErrorCategory::Transient => format!("try again later: {}", err.user_message()),
//!         _ => err.user_message(),
//!     }
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and display decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The provider or the network had an issue.
    External,

    /// The caller can fix this (unknown label, missing key, bad input).
    Client,

    /// Temporary failures such as rate limiting.
    ///
    /// The crate never retries on its own; this is a hint for the caller.
    Transient,
}

/// Severity level for logging decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed but the process is fine.
    Error,

    /// Unexpected but recoverable.
    Warning,

    /// Expected failure, e.g. validation of user input.
    Info,
}

// ============================================================================
// FinePrint error type
// ============================================================================

/// Convenient result type for fineprint operations.
pub type FinePrintResult<T> = std::result::Result<T, FinePrintError>;

/// Errors that can occur while analyzing a document.
///
/// Use the constructor methods (`FinePrintError::unknown_provider(..)` and
/// friends); they log the error at the right level before returning it.
///
/// | Variant | Category | Provider error |
/// |---------|----------|----------------|
/// | `UnknownProvider` | Client | no |
/// | `MissingCredential` | Client | no |
/// | `Configuration` | Client | no |
/// | `EmptyDocument` | Client | no |
/// | `UnsupportedDocument` | Client | no |
/// | `Extraction` | Client | no |
/// | `RequestFailed` | External | yes |
/// | `AuthenticationFailed` | Client | yes |
/// | `RateLimitExceeded` | Transient | yes |
/// | `ResponseParsing` | External | yes |
#[derive(Error, Debug)]
pub enum FinePrintError {
    /// The provider label is not in the registry.
    #[error("Unknown provider: {label}")]
    UnknownProvider {
        /// The label that was requested.
        label: String,
    },

    /// No credential is configured for the provider.
    ///
    /// Raised before any network call is attempted.
    #[error("No API key configured for {label} (set {env_var})")]
    MissingCredential {
        /// Provider label.
        label: String,
        /// Environment variable the credential is read from.
        env_var: String,
    },

    /// Settings or registry contents are invalid.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the problem.
        message: String,
    },

    /// The document text is empty or whitespace only.
    #[error("Document is empty")]
    EmptyDocument,

    /// No extractor accepts this file.
    #[error("Unsupported document type: {declared_type} ({file_name})")]
    UnsupportedDocument {
        /// Name of the uploaded file.
        file_name: String,
        /// MIME type declared by the uploader.
        declared_type: String,
    },

    /// An extractor accepted the file but could not read text from it.
    #[error("Failed to extract text from {file_name}: {message}")]
    Extraction {
        /// Name of the uploaded file.
        file_name: String,
        /// Details about the failure.
        message: String,
    },

    /// The HTTP request to the provider failed.
    #[error("{provider} request failed: {message}")]
    RequestFailed {
        /// Provider label.
        provider: String,
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider rejected the credential.
    #[error("{provider} authentication failed: {message}")]
    AuthenticationFailed {
        /// Provider label.
        provider: String,
        /// Details about the failure.
        message: String,
    },

    /// The provider is throttling requests.
    #[error("{provider} rate limit exceeded, retry after {retry_after_seconds}s")]
    RateLimitExceeded {
        /// Provider label.
        provider: String,
        /// Wait time suggested by the provider.
        retry_after_seconds: u64,
    },

    /// The provider answered, but not with an envelope we understand.
    #[error("{provider} response could not be parsed: {message}")]
    ResponseParsing {
        /// Provider label.
        provider: String,
        /// Details about the parse failure.
        message: String,
    },
}

impl FinePrintError {
    /// Get the error category for routing and display decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownProvider { .. }
            | Self::MissingCredential { .. }
            | Self::Configuration { .. }
            | Self::EmptyDocument
            | Self::UnsupportedDocument { .. }
            | Self::Extraction { .. }
            | Self::AuthenticationFailed { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } | Self::ResponseParsing { .. } => ErrorCategory::External,
            Self::RateLimitExceeded { .. } => ErrorCategory::Transient,
        }
    }

    /// Get the error severity for logging.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyDocument | Self::UnsupportedDocument { .. } => ErrorSeverity::Info,
            Self::RateLimitExceeded { .. }
            | Self::ResponseParsing { .. }
            | Self::Extraction { .. } => ErrorSeverity::Warning,
            Self::UnknownProvider { .. }
            | Self::MissingCredential { .. }
            | Self::Configuration { .. }
            | Self::RequestFailed { .. }
            | Self::AuthenticationFailed { .. } => ErrorSeverity::Error,
        }
    }

    /// Whether a later attempt could succeed without changes.
    ///
    /// Advisory only: nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimitExceeded { .. } | Self::RequestFailed { .. }
        )
    }

    /// Whether the failure came from the remote provider call.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            Self::RequestFailed { .. }
                | Self::AuthenticationFailed { .. }
                | Self::RateLimitExceeded { .. }
                | Self::ResponseParsing { .. }
        )
    }

    /// Convert to a message that is safe to show to end users.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownProvider { label } => {
                format!("\"{label}\" is not a supported AI provider")
            }
            Self::MissingCredential { label, .. } => {
                format!("Please provide your API key for {label}")
            }
            Self::Configuration { .. } => {
                "Configuration issue. Please check your settings".to_string()
            }
            Self::EmptyDocument => "Please provide a document to analyze".to_string(),
            Self::UnsupportedDocument { declared_type, .. } => {
                format!("Unsupported file type: {declared_type}")
            }
            Self::Extraction { message, .. } => format!("Error reading file: {message}"),
            Self::RequestFailed { provider, .. } => {
                format!("Unable to reach {provider}. Please try again")
            }
            Self::AuthenticationFailed { provider, .. } => {
                format!("{provider} rejected the API key. Please check it")
            }
            Self::RateLimitExceeded {
                retry_after_seconds,
                ..
            } => {
                format!("Service is busy. Please wait {retry_after_seconds} seconds and try again")
            }
            Self::ResponseParsing { provider, .. } => {
                format!("Received an invalid response from {provider}")
            }
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn unknown_provider(label: impl Into<String>) -> Self {
        let label = label.into();
        log_error!(
            provider = %label,
            error_type = "unknown_provider",
            "Unknown provider requested"
        );
        Self::UnknownProvider { label }
    }

    pub fn missing_credential(label: impl Into<String>, env_var: impl Into<String>) -> Self {
        let label = label.into();
        let env_var = env_var.into();
        log_error!(
            provider = %label,
            env_var = %env_var,
            error_type = "missing_credential",
            "No credential configured for provider"
        );
        Self::MissingCredential { label, env_var }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Configuration validation failed"
        );
        Self::Configuration { message }
    }

    pub fn unsupported_document(
        file_name: impl Into<String>,
        declared_type: impl Into<String>,
    ) -> Self {
        let file_name = file_name.into();
        let declared_type = declared_type.into();
        log_warn!(
            file_name = %file_name,
            declared_type = %declared_type,
            error_type = "unsupported_document",
            "No extractor for document"
        );
        Self::UnsupportedDocument {
            file_name,
            declared_type,
        }
    }

    pub fn extraction(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let message = message.into();
        log_warn!(
            file_name = %file_name,
            message = %message,
            error_type = "extraction_failed",
            "Document text extraction failed"
        );
        Self::Extraction { file_name, message }
    }

    pub fn request_failed(
        provider: impl Into<String>,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let provider = provider.into();
        let message = message.into();
        log_error!(
            provider = %provider,
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Provider request failed"
        );
        Self::RequestFailed {
            provider,
            message,
            source,
        }
    }

    pub fn authentication_failed(provider: impl Into<String>, message: impl Into<String>) -> Self {
        let provider = provider.into();
        let message = message.into();
        log_error!(
            provider = %provider,
            error_type = "authentication_failed",
            message = %message,
            "Provider authentication failed"
        );
        Self::AuthenticationFailed { provider, message }
    }

    pub fn rate_limit_exceeded(provider: impl Into<String>, retry_after_seconds: u64) -> Self {
        let provider = provider.into();
        log_warn!(
            provider = %provider,
            error_type = "rate_limit_exceeded",
            retry_after_seconds = retry_after_seconds,
            "Provider rate limit exceeded"
        );
        Self::RateLimitExceeded {
            provider,
            retry_after_seconds,
        }
    }

    pub fn response_parsing(provider: impl Into<String>, message: impl Into<String>) -> Self {
        let provider = provider.into();
        let message = message.into();
        log_warn!(
            provider = %provider,
            error_type = "response_parsing_error",
            message = %message,
            "Provider response envelope invalid"
        );
        Self::ResponseParsing { provider, message }
    }
}
