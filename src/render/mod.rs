//! Output formats for the `fineprint` binary.

use fineprint::{AnalysisReport, FinePrintError, FinePrintResult, ScoreRecord};
use serde_json::json;


pub(crate) fn render_text(
    provider: &str,
    scores: &FinePrintResult<Option<ScoreRecord>>,
    report: Option<&FinePrintResult<AnalysisReport>>,
) -> String {
    let mut out = format!("FinePrint analysis via {provider}\n\n");

    match scores {
        Ok(Some(record)) => {
            out.push_str(&format!("OVERALL RISK: {}\n", record.overall_risk));
            out.push_str(&format!("{}\n\n", record.one_line_verdict));
            out.push_str(&format!(
                "  Hidden fees     {:<9} {} found, worst: {}\n",
                record.hidden_fees.risk.as_str(),
                record.hidden_fees.count,
                record.hidden_fees.worst
            ));
            out.push_str(&format!(
                "  Arbitration     {:<9} can sue: {}, class action waiver: {}\n",
                record.arbitration.risk.as_str(),
                yes_no(record.arbitration.can_sue),
                yes_no(record.arbitration.class_action_waiver)
            ));
            out.push_str(&format!(
                "  Variable rates  {:<9} variable: {}, can change anytime: {}\n",
                record.variable_rates.risk.as_str(),
                yes_no(record.variable_rates.is_variable),
                yes_no(record.variable_rates.can_change_anytime)
            ));
            out.push_str(&format!(
                "  Privacy         {:<9} sells data: {:?}, opt-out: {}\n",
                record.privacy.risk.as_str(),
                record.privacy.sells_data,
                yes_no(record.privacy.opt_out_available)
            ));
        }
        Ok(None) => out.push_str("Risk scores unavailable: the provider's answer could not be read.\n"),
        Err(err) => out.push_str(&format!("Risk scores failed: {}\n", err.user_message())),
    }

    if let Some(report) = report {
        out.push_str(&format!("\n{}\n\n", "=".repeat(72)));
        match report {
            Ok(report) => out.push_str(&report.to_plain_text()),
            Err(err) => out.push_str(&format!("Analysis failed: {}", err.user_message())),
        }
    }

    out
}

/// HTML fragment for the scorecard and report.
///
/// Scorecard text from the provider is escaped. The report body keeps its
/// inline `<span>` highlighting, so it is only as safe as the provider output.
pub(crate) fn render_html(
    scores: &FinePrintResult<Option<ScoreRecord>>,
    report: Option<&FinePrintResult<AnalysisReport>>,
) -> String {
    let mut out = String::new();

    match scores {
        Ok(Some(record)) => {
            out.push_str(&format!(
                r#"<div style="border-left: 4px solid {color}; padding: 1rem;"><h2 style="color: {color};">Overall risk: {level}</h2><p>{verdict}</p><ul>"#,
                color = record.overall_risk.color(),
                level = record.overall_risk,
                verdict = escape_html(&record.one_line_verdict)
            ));
            for (name, level) in [
                ("Hidden fees", record.hidden_fees.risk),
                ("Arbitration", record.arbitration.risk),
                ("Variable rates", record.variable_rates.risk),
                ("Privacy", record.privacy.risk),
            ] {
                out.push_str(&format!(
                    r#"<li>{name}: <span style="color: {};">{level}</span></li>"#,
                    level.color()
                ));
            }
            out.push_str("</ul></div>\n");
        }
        Ok(None) => out.push_str("<p>Risk scores unavailable.</p>\n"),
        Err(err) => out.push_str(&format!(
            "<p>Risk scores failed: {}</p>\n",
            escape_html(&err.user_message())
        )),
    }

    match report {
        Some(Ok(report)) => out.push_str(&report.render_html()),
        Some(Err(err)) => out.push_str(&format!(
            "<p>Analysis failed: {}</p>",
            escape_html(&err.user_message())
        )),
        None => {}
    }

    out
}

pub(crate) fn render_json(
    provider: &str,
    header: Option<serde_json::Value>,
    scores: &FinePrintResult<Option<ScoreRecord>>,
    report: Option<&FinePrintResult<AnalysisReport>>,
) -> anyhow::Result<String> {
    let mut value = header.unwrap_or_else(|| json!({}));
    value["provider"] = json!(provider);
    value["scores"] = match scores {
        Ok(record) => json!(record),
        Err(_) => serde_json::Value::Null,
    };
    value["scores_error"] = json!(scores.as_ref().err().map(FinePrintError::user_message));
    if let Some(report) = report {
        value["report"] = json!(report.as_ref().ok());
        value["report_error"] = json!(report.as_ref().err().map(FinePrintError::user_message));
    }

    Ok(serde_json::to_string_pretty(&value)?)
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
