//! Long-form analysis report
//!
//! The report is whatever text the provider produced for the scorecard
//! prompt: markdown with inline `<span>` highlighting. Nothing depends on its
//! structure; the rendering helpers are for display only.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const BODY_STYLE: &str = "color: #94a3b8; line-height: 1.6;";

static H1: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^# (.+)$"));
static H2: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^## (.+)$"));
static H3: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^### (.+)$"));
static BOLD: Lazy<Regex> = Lazy::new(|| compile(r"\*\*(.+?)\*\*"));
static ITALIC: Lazy<Regex> = Lazy::new(|| compile(r"\*(.+?)\*"));
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^- (.+)$"));
static RULE: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^---+$"));
static TAG: Lazy<Regex> = Lazy::new(|| compile(r"<[^>]+>"));

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("report pattern must compile")
}

/// Provider-written analysis text, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisReport(String);

impl AnalysisReport {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Render the markdown subset providers use into an HTML fragment.
    ///
    /// Headers, bold, italics, dash lists, horizontal rules and blank-line
    /// paragraphs are converted; inline HTML passes through untouched.
    pub fn render_html(&self) -> String {
        let text = H1.replace_all(&self.0, "<h1>${1}</h1>");
        let text = H2.replace_all(
            &text,
            r#"<h2 style="color: #e2e8f0; margin-top: 1.5rem;">${1}</h2>"#,
        );
        let text = H3.replace_all(&text, r#"<h3 style="color: #cbd5e1;">${1}</h3>"#);
        let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
        let text = ITALIC.replace_all(&text, "<em>${1}</em>");
        let text = LIST_ITEM.replace_all(
            &text,
            r#"<li style="margin-left: 1rem; color: #94a3b8;">${1}</li>"#,
        );
        let text = RULE.replace_all(
            &text,
            r#"<hr style="border-color: rgba(255,255,255,0.1); margin: 1.5rem 0;">"#,
        );
        let text = text.replace("\n\n", &format!(r#"</p><p style="{BODY_STYLE}">"#));

        format!(r#"<div style="{BODY_STYLE}"><p style="color: #94a3b8;">{text}</p></div>"#)
    }

    /// The report with all HTML tags removed, for terminals.
    pub fn to_plain_text(&self) -> String {
        TAG.replace_all(&self.0, "").into_owned()
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AnalysisReport {
    fn from(text: String) -> Self {
        Self(text)
    }
}
