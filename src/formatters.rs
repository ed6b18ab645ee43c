//! Output formatters for verdicts and batch reports
//!
//! Transforms [`Verdict`]s and [`BatchReport`]s into colored text or JSON.

use colored::Colorize;
use serde::Serialize;

use crate::batch::{BatchReport, BatchSummary, Verdict};
use crate::cuit::{CuitError, CuitKind};
use crate::ui::{self, colors};

/// Serializable view of a single verdict
#[derive(Debug, Serialize)]
pub struct VerdictJson<'a> {
    pub line: usize,
    pub input: &'a str,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CuitKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<u8>,
}

impl<'a> From<&'a Verdict> for VerdictJson<'a> {
    fn from(verdict: &'a Verdict) -> Self {
        let mut json = VerdictJson {
            line: verdict.line,
            input: &verdict.input,
            valid: verdict.is_valid(),
            cuit: None,
            kind: None,
            reason: None,
            message: None,
            expected: None,
            found: None,
        };
        match &verdict.result {
            Ok(cuit) => {
                json.cuit = Some(cuit.to_string());
                json.kind = Some(cuit.kind());
            }
            Err(err) => {
                json.reason = Some(err.code());
                json.message = Some(err.to_string());
                if let CuitError::CheckDigitMismatch { expected, found } = err {
                    json.expected = Some(*expected);
                    json.found = Some(*found);
                }
            }
        }
        json
    }
}

#[derive(Debug, Serialize)]
struct ReportJson<'a> {
    summary: BatchSummary,
    verdicts: Vec<VerdictJson<'a>>,
}

/// Format one verdict as a single text line.
pub fn format_verdict(verdict: &Verdict, explain: bool) -> String {
    match &verdict.result {
        Ok(cuit) => format!(
            "{} {} {}",
            ui::verdict_icon(true),
            colors::identifier(&cuit.to_string()),
            colors::secondary(&format!("({})", ui::kind_label(cuit.kind())))
        ),
        Err(err) => {
            let mut line = format!(
                "{} {}",
                ui::verdict_icon(false),
                ui::format::quoted(&verdict.input)
            );
            if explain {
                line.push_str(&format!(" {}", colors::secondary(&err.to_string())));
            }
            line
        }
    }
}

/// Format a batch report as text: one numbered line per verdict, then a summary.
pub fn format_report(report: &BatchReport, only_invalid: bool, explain: bool) -> String {
    let mut output = Vec::new();

    for verdict in &report.verdicts {
        if only_invalid && verdict.is_valid() {
            continue;
        }
        output.push(format!(
            "{:>5}  {}",
            verdict.line,
            format_verdict(verdict, explain)
        ));
    }

    if !output.is_empty() {
        output.push(String::new());
    }
    output.push(format_summary(&report.summary));
    output.join("\n")
}

/// One-line totals, e.g. `Checked 5: 3 valid, 2 invalid, 1 skipped`
pub fn format_summary(summary: &BatchSummary) -> String {
    let valid = format!("{} valid", summary.valid);
    let invalid = format!("{} invalid", summary.invalid);
    let mut line = format!(
        "{} {}: {}, {}",
        colors::heading("Checked"),
        summary.total,
        colors::success(&valid),
        if summary.invalid > 0 {
            colors::error(&invalid)
        } else {
            invalid.as_str().normal()
        }
    );
    if summary.skipped > 0 {
        line.push_str(&format!(
            ", {}",
            colors::warning(&format!("{} skipped", summary.skipped))
        ));
    }
    line
}

/// Format a batch report as pretty-printed JSON.
pub fn format_report_json(report: &BatchReport, only_invalid: bool) -> serde_json::Result<String> {
    let verdicts = report
        .verdicts
        .iter()
        .filter(|v| !only_invalid || !v.is_valid())
        .map(VerdictJson::from)
        .collect();
    serde_json::to_string_pretty(&ReportJson {
        summary: report.summary,
        verdicts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BatchReport {
        BatchReport::from_verdicts(vec![
            Verdict::new(1, "20123456743"),
            Verdict::new(2, "20-12345674-5"),
            Verdict::new(3, "30-12345674-9"),
        ])
    }

    #[test]
    fn test_format_valid_verdict_uses_canonical_form() {
        let line = format_verdict(&Verdict::new(1, " 20123456743 "), false);
        assert!(line.contains("20-12345674-3"));
        assert!(line.contains("physical"));
    }

    #[test]
    fn test_format_invalid_verdict_explains_on_request() {
        let verdict = Verdict::new(1, "20-12345674-5");
        let terse = format_verdict(&verdict, false);
        assert!(terse.contains("\"20-12345674-5\""));
        assert!(!terse.contains("mismatch"));

        let explained = format_verdict(&verdict, true);
        assert!(explained.contains("check digit mismatch: expected 3, found 5"));
    }

    #[test]
    fn test_format_report_only_invalid() {
        let text = format_report(&sample_report(), true, false);
        assert!(text.contains("20-12345674-5"));
        assert!(!text.contains("20-12345674-3"));
        assert!(text.contains("Checked"));
    }

    #[test]
    fn test_format_summary_mentions_skipped() {
        let summary = BatchSummary {
            total: 2,
            valid: 1,
            invalid: 1,
            skipped: 4,
        };
        let line = format_summary(&summary);
        assert!(line.contains("1 valid"));
        assert!(line.contains("1 invalid"));
        assert!(line.contains("4 skipped"));

        let line = format_summary(&BatchSummary::default());
        assert!(!line.contains("skipped"));
    }

    #[test]
    fn test_format_report_json() {
        let json = format_report_json(&sample_report(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["total"], 3);
        assert_eq!(value["summary"]["invalid"], 1);
        assert_eq!(value["verdicts"][0]["cuit"], "20-12345674-3");
        assert_eq!(value["verdicts"][0]["kind"], "physical");
        assert_eq!(value["verdicts"][1]["valid"], false);
        assert_eq!(value["verdicts"][1]["reason"], "check_digit_mismatch");
        assert_eq!(value["verdicts"][1]["expected"], 3);
        assert_eq!(value["verdicts"][1]["found"], 5);
        assert!(value["verdicts"][1].get("cuit").is_none());
        assert_eq!(value["verdicts"][2]["kind"], "juridical");
    }

    #[test]
    fn test_format_report_json_only_invalid_keeps_summary() {
        let json = format_report_json(&sample_report(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["total"], 3);
        assert_eq!(value["verdicts"].as_array().unwrap().len(), 1);
        assert_eq!(value["verdicts"][0]["line"], 2);
    }
}
