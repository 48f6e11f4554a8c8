use crate::error::{FinePrintError, FinePrintResult};
use crate::logging::log_debug;
use crate::registry::ProviderDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token cap for the long-form analysis call.
pub const DEFAULT_MAX_TOKENS_ANALYSIS: u32 = 4096;
/// Token cap for the quick scoring call.
pub const DEFAULT_MAX_TOKENS_SCORING: u32 = 800;
/// Characters of the document sent to the scoring call.
pub const DEFAULT_MAX_DOCUMENT_LENGTH: usize = 10_000;

/// Environment variable overriding [`AnalysisSettings::max_tokens_analysis`].
pub const ENV_MAX_TOKENS_ANALYSIS: &str = "FINEPRINT_MAX_TOKENS_ANALYSIS";
/// Environment variable overriding [`AnalysisSettings::max_tokens_scoring`].
pub const ENV_MAX_TOKENS_SCORING: &str = "FINEPRINT_MAX_TOKENS_SCORING";
/// Environment variable overriding [`AnalysisSettings::max_document_length`].
pub const ENV_MAX_DOCUMENT_LENGTH: &str = "FINEPRINT_MAX_DOCUMENT_LENGTH";

/// An API key. Never printed, never logged.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Read the credential for a provider from its environment variable.
    ///
    /// Returns `None` when the variable is unset or blank, which callers must
    /// treat as "not configured".
    pub fn from_env(descriptor: &ProviderDescriptor) -> Option<Self> {
        let credential = std::env::var(&descriptor.credential_env_var)
            .ok()
            .map(Self::new)
            .filter(|c| !c.is_empty());

        log_debug!(
            provider = %descriptor.label,
            env_var = %descriptor.credential_env_var,
            configured = credential.is_some(),
            "Resolved provider credential"
        );

        credential
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Credential(<empty>)")
        } else {
            write!(f, "Credential(<redacted>)")
        }
    }
}

impl From<&str> for Credential {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for Credential {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

/// Limits applied to every analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    pub max_tokens_analysis: u32,
    pub max_tokens_scoring: u32,
    /// Scoring prompts carry at most this many characters of the document.
    pub max_document_length: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_tokens_analysis: DEFAULT_MAX_TOKENS_ANALYSIS,
            max_tokens_scoring: DEFAULT_MAX_TOKENS_SCORING,
            max_document_length: DEFAULT_MAX_DOCUMENT_LENGTH,
        }
    }
}

impl AnalysisSettings {
    /// Load settings, letting `FINEPRINT_*` variables override the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FinePrintError::Configuration`] if a variable is set but is
    /// not a positive integer.
    pub fn from_env() -> FinePrintResult<Self> {
        let mut settings = Self::default();

        if let Some(value) = Self::parse_env::<u32>(ENV_MAX_TOKENS_ANALYSIS)? {
            settings.max_tokens_analysis = value;
        }
        if let Some(value) = Self::parse_env::<u32>(ENV_MAX_TOKENS_SCORING)? {
            settings.max_tokens_scoring = value;
        }
        if let Some(value) = Self::parse_env::<usize>(ENV_MAX_DOCUMENT_LENGTH)? {
            settings.max_document_length = value;
        }

        settings.validate()?;

        log_debug!(
            max_tokens_analysis = settings.max_tokens_analysis,
            max_tokens_scoring = settings.max_tokens_scoring,
            max_document_length = settings.max_document_length,
            "Analysis settings loaded"
        );

        Ok(settings)
    }

    /// Check every limit is non-zero.
    pub fn validate(&self) -> FinePrintResult<()> {
        if self.max_tokens_analysis == 0 {
            return Err(FinePrintError::configuration(
                "max_tokens_analysis must be greater than zero",
            ));
        }
        if self.max_tokens_scoring == 0 {
            return Err(FinePrintError::configuration(
                "max_tokens_scoring must be greater than zero",
            ));
        }
        if self.max_document_length == 0 {
            return Err(FinePrintError::configuration(
                "max_document_length must be greater than zero",
            ));
        }
        Ok(())
    }

    fn parse_env<T: std::str::FromStr>(key: &str) -> FinePrintResult<Option<T>> {
        match std::env::var(key) {
            Ok(raw) if !raw.trim().is_empty() => {
                raw.trim().parse::<T>().map(Some).map_err(|_| {
                    FinePrintError::configuration(format!(
                        "{key} must be a positive integer, got \"{raw}\""
                    ))
                })
            }
            _ => Ok(None),
        }
    }
}
