//! Score records and normalization of raw scoring responses
//!
//! The scoring call asks the provider for a bare JSON object. Models often
//! wrap it in a fenced code block anyway, so normalization strips a leading
//! fence (and an optional `json` tag) before parsing. Anything that does not
//! deserialize into a complete [`ScoreRecord`] becomes "no result"; a
//! partially filled record is never returned.

use crate::logging::{log_debug, log_warn};
use serde::{Deserialize, Serialize};
use std::fmt;

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// Ordinal consumer-risk severity shared by every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    /// Display color used for this level in rendered output.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#22c55e",
            RiskLevel::Medium => "#f59e0b",
            RiskLevel::High => "#ef4444",
            RiskLevel::Critical => "#dc2626",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown risk level: {s}"))
    }
}

/// Whether the institution sells customer data.
///
/// Providers answer `true`, `false` or the string `"unclear"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSelling {
    Yes,
    No,
    Unclear,
}

impl Serialize for DataSelling {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DataSelling::Yes => serializer.serialize_bool(true),
            DataSelling::No => serializer.serialize_bool(false),
            DataSelling::Unclear => serializer.serialize_str("unclear"),
        }
    }
}

impl<'de> Deserialize<'de> for DataSelling {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(DataSelling::Yes),
            Raw::Flag(false) => Ok(DataSelling::No),
            Raw::Text(text) if text.eq_ignore_ascii_case("unclear") => Ok(DataSelling::Unclear),
            Raw::Text(text) => Err(serde::de::Error::custom(format!(
                "sells_data must be true, false or \"unclear\", got \"{text}\""
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenFeesScore {
    pub risk: RiskLevel,
    /// Number of fees found outside the disclosure header.
    pub count: u32,
    /// Short description of the worst one.
    pub worst: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbitrationScore {
    pub risk: RiskLevel,
    pub can_sue: bool,
    pub class_action_waiver: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRatesScore {
    pub risk: RiskLevel,
    pub is_variable: bool,
    pub can_change_anytime: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyScore {
    pub risk: RiskLevel,
    pub sells_data: DataSelling,
    pub opt_out_available: bool,
}

/// Machine-readable risk summary of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub overall_risk: RiskLevel,
    pub hidden_fees: HiddenFeesScore,
    pub arbitration: ArbitrationScore,
    pub variable_rates: VariableRatesScore,
    pub privacy: PrivacyScore,
    pub one_line_verdict: String,
}

impl ScoreRecord {
    /// The five risk fields, overall first.
    pub fn risk_levels(&self) -> [RiskLevel; 5] {
        [
            self.overall_risk,
            self.hidden_fees.risk,
            self.arbitration.risk,
            self.variable_rates.risk,
            self.privacy.risk,
        ]
    }

    /// Highest category risk, ignoring the provider's overall rating.
    pub fn worst_category(&self) -> RiskLevel {
        self.risk_levels()[1..]
            .iter()
            .copied()
            .max()
            .unwrap_or(self.overall_risk)
    }
}

/// Why a scoring response was turned into "no result".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreRejection {
    /// Not JSON at all, or an empty fence.
    Unparseable(String),
    /// Valid JSON, but not an object.
    NotAnObject,
    /// An object that does not match the score schema.
    Schema(String),
}

impl fmt::Display for ScoreRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreRejection::Unparseable(msg) => write!(f, "response is not valid JSON: {msg}"),
            ScoreRejection::NotAnObject => write!(f, "response JSON is not an object"),
            ScoreRejection::Schema(msg) => write!(f, "response JSON does not match schema: {msg}"),
        }
    }
}

/// Remove a leading code fence and its optional `json` tag.
///
/// Text without a leading fence comes back trimmed. With a fence, the first
/// enclosed segment is returned; an unclosed fence yields everything after it.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(after_fence) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };

    let segment = after_fence
        .split_once(FENCE)
        .map_or(after_fence, |(inner, _)| inner);

    segment.strip_prefix(JSON_TAG).unwrap_or(segment)
}

/// Parse raw scoring text, reporting why it was rejected.
pub fn parse_scores(raw: &str) -> Result<ScoreRecord, ScoreRejection> {
    let payload = strip_code_fence(raw);

    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| ScoreRejection::Unparseable(e.to_string()))?;

    if !value.is_object() {
        return Err(ScoreRejection::NotAnObject);
    }

    serde_json::from_value(value).map_err(|e| ScoreRejection::Schema(e.to_string()))
}

/// Normalize raw scoring text into a record, or `None` when it cannot be used.
///
/// Never panics and never returns a partial record.
pub fn normalize_scores(raw: &str) -> Option<ScoreRecord> {
    match parse_scores(raw) {
        Ok(record) => {
            log_debug!(
                overall_risk = %record.overall_risk,
                "Parsed risk scores"
            );
            Some(record)
        }
        Err(rejection) => {
            log_warn!(
                reason = %rejection,
                content_preview = raw.chars().take(200).collect::<String>(),
                "Discarding unusable scoring response"
            );
            None
        }
    }
}
