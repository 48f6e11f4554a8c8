//! Contract analysis facade
//!
//! Ties the prompts, the gateway and score normalization together. The two
//! paths are independent: the quick scorecard can fail to parse while the
//! long-form report succeeds, and the reverse.
//!
//! ```rust,no_run
//! use fineprint::{AnalysisRequest, Credential, FinePrintAnalyzer};
//!
//! # async fn run() -> fineprint::FinePrintResult<()> {
//! let analyzer = FinePrintAnalyzer::default();
//! let request = AnalysisRequest::new(
//!     "Late fee: $40. Disputes go to binding arbitration.",
//!     Credential::new("gsk_..."),
//!     "Groq (Free)",
//! );
//!
//! let outcome = analyzer.analyze(&request).await;
//! if let Ok(Some(scores)) = &outcome.scores {
//!     println!("{}", scores.one_line_verdict);
//! }
//! # Ok(())
//! # }
//! ```

use crate::config::{AnalysisSettings, Credential};
use crate::error::{FinePrintError, FinePrintResult};
use crate::gateway::AnalysisGateway;
use crate::logging::log_info;
use crate::prompts::{format_analysis_prompt, format_scoring_prompt, SYSTEM_PROMPT};
use crate::registry::DEFAULT_PROVIDER_LABEL;
use crate::report::AnalysisReport;
use crate::scoring::{normalize_scores, ScoreRecord};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One document to analyze with one provider.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub document_text: String,
    pub credential: Credential,
    pub provider_label: String,
}

impl AnalysisRequest {
    pub fn new(
        document_text: impl Into<String>,
        credential: Credential,
        provider_label: impl Into<String>,
    ) -> Self {
        Self {
            document_text: document_text.into(),
            credential,
            provider_label: provider_label.into(),
        }
    }

    /// Request against the default provider.
    pub fn with_default_provider(document_text: impl Into<String>, credential: Credential) -> Self {
        Self::new(document_text, credential, DEFAULT_PROVIDER_LABEL)
    }
}

/// Result of running both analysis paths over one document.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub analysis_id: Uuid,
    pub provider_label: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    /// `Ok(None)` means the provider answered but not with a usable scorecard.
    pub scores: FinePrintResult<Option<ScoreRecord>>,
    pub report: FinePrintResult<AnalysisReport>,
}

impl AnalysisOutcome {
    /// Both paths produced something to show.
    pub fn is_complete(&self) -> bool {
        matches!(self.scores, Ok(Some(_))) && self.report.is_ok()
    }
}

/// Runs scoring and long-form analysis through an [`AnalysisGateway`].
#[derive(Debug, Clone, Default)]
pub struct FinePrintAnalyzer {
    gateway: AnalysisGateway,
    settings: AnalysisSettings,
}

impl FinePrintAnalyzer {
    pub fn new(gateway: AnalysisGateway, settings: AnalysisSettings) -> Self {
        Self { gateway, settings }
    }

    pub fn gateway(&self) -> &AnalysisGateway {
        &self.gateway
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Quick scorecard for the document.
    ///
    /// Only the first `max_document_length` characters are sent.
    ///
    /// # Errors
    ///
    /// [`FinePrintError::EmptyDocument`] for blank text, otherwise whatever
    /// the gateway returns. An unparseable answer is `Ok(None)`, not an error.
    pub async fn get_risk_scores(
        &self,
        request: &AnalysisRequest,
    ) -> FinePrintResult<Option<ScoreRecord>> {
        Self::validate(request)?;

        let prompt = format_scoring_prompt(&request.document_text, self.settings.max_document_length);
        let raw = self
            .gateway
            .invoke(
                &request.provider_label,
                &request.credential,
                SYSTEM_PROMPT,
                &prompt,
                self.settings.max_tokens_scoring,
            )
            .await?;

        Ok(normalize_scores(&raw))
    }

    /// Full long-form report for the document.
    ///
    /// # Errors
    ///
    /// [`FinePrintError::EmptyDocument`] for blank text, otherwise whatever
    /// the gateway returns.
    pub async fn analyze_document(
        &self,
        request: &AnalysisRequest,
    ) -> FinePrintResult<AnalysisReport> {
        Self::validate(request)?;

        let prompt = format_analysis_prompt(&request.document_text);
        let text = self
            .gateway
            .invoke(
                &request.provider_label,
                &request.credential,
                SYSTEM_PROMPT,
                &prompt,
                self.settings.max_tokens_analysis,
            )
            .await?;

        Ok(AnalysisReport::new(text))
    }

    /// Run both paths concurrently and keep each result.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisOutcome {
        let analysis_id = Uuid::new_v4();
        let started_at = Utc::now();

        log_info!(
            analysis_id = %analysis_id,
            provider = %request.provider_label,
            document_chars = request.document_text.chars().count(),
            "Starting contract analysis"
        );

        let (scores, report) = futures_util::future::join(
            self.get_risk_scores(request),
            self.analyze_document(request),
        )
        .await;

        let completed_at = Utc::now();

        log_info!(
            analysis_id = %analysis_id,
            provider = %request.provider_label,
            scores_ok = scores.is_ok(),
            scorecard = matches!(scores, Ok(Some(_))),
            report_ok = report.is_ok(),
            duration_ms = (completed_at - started_at).num_milliseconds(),
            "Contract analysis finished"
        );

        AnalysisOutcome {
            analysis_id,
            provider_label: request.provider_label.clone(),
            started_at,
            completed_at,
            scores,
            report,
        }
    }

    fn validate(request: &AnalysisRequest) -> FinePrintResult<()> {
        if request.document_text.trim().is_empty() {
            return Err(FinePrintError::EmptyDocument);
        }
        Ok(())
    }
}
