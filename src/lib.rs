//! # fineprint
//!
//! Consumer-risk analysis of financial contracts through interchangeable LLM
//! providers.
//!
//! ## Key Features
//!
//! - **Provider registry**: Groq, Google Gemini and Anthropic Claude behind
//!   one label-keyed table
//! - **Two analysis paths**: a structured risk scorecard and a long-form
//!   attorney-style report, run concurrently and failing independently
//! - **Tolerant scoring**: fenced or malformed JSON degrades to "no result"
//!   rather than an error
//! - **No hidden retries**: provider failures reach the caller unchanged
//!
//! ## Example
//!
//! ```rust,no_run
//! use fineprint::{AnalysisRequest, Credential, FinePrintAnalyzer, SAMPLE_DOCUMENT};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let analyzer = FinePrintAnalyzer::default();
//! let request = AnalysisRequest::new(
//!     SAMPLE_DOCUMENT,
//!     Credential::new(std::env::var("GROQ_API_KEY")?),
//!     "Groq (Free)",
//! );
//!
//! let report = analyzer.analyze_document(&request).await?;
//! println!("{}", report.to_plain_text());
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod analyzer;
pub mod config;
pub mod error;
pub mod gateway;
pub mod ingest;
pub mod prompts;
pub mod providers;
pub mod registry;
pub mod report;
pub mod sample;
pub mod scoring;

#[cfg(test)]
pub mod tests;

pub use analyzer::{AnalysisOutcome, AnalysisRequest, FinePrintAnalyzer};
pub use config::{AnalysisSettings, Credential};
pub use error::{FinePrintError, FinePrintResult};
pub use gateway::AnalysisGateway;
pub use ingest::{
    preview, DocumentIngestor, PlainTextExtractor, TextExtractor, DEFAULT_PREVIEW_CHARS,
};
pub use prompts::{format_analysis_prompt, format_scoring_prompt, SYSTEM_PROMPT};
pub use providers::{AdapterFactory, CompletionAdapter, CompletionRequest, HttpAdapterFactory};
pub use registry::{AdapterKind, ProviderDescriptor, ProviderRegistry, DEFAULT_PROVIDER_LABEL};
pub use report::AnalysisReport;
pub use sample::SAMPLE_DOCUMENT;
pub use scoring::{normalize_scores, parse_scores, RiskLevel, ScoreRecord};
