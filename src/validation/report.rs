//! Scenario outcome formatting
//!
//! Text output prints one line per case with intrusion flags as `1`
//! (intruder) and `0` (compliant). JSON output wraps the same data in a
//! single document.

use serde::{Deserialize, Serialize};

use crate::validation::scenario::{CaseOutcome, RunSummary};

/// Output format for run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Line-oriented human readable report
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Append the closing line when every case passed
    pub summary_line: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { summary_line: true }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format_outcome(&self, outcome: &CaseOutcome) -> String {
        format!(
            "{}: got={} expected={}  [{}]",
            outcome.name,
            u8::from(outcome.got),
            u8::from(outcome.expected),
            if outcome.passed { "OK" } else { "FAIL" }
        )
    }

    pub fn format_summary(&self, summary: &RunSummary) -> String {
        let mut out = String::new();
        for outcome in &summary.outcomes {
            out.push_str(&self.format_outcome(outcome));
            out.push('\n');
        }
        if self.summary_line && summary.all_passed() {
            out.push_str("All tests passed.\n");
        }
        out
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    outcomes: &'a [CaseOutcome],
    halted: bool,
    passed: bool,
}

#[derive(Debug, Clone)]
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line output
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn format_summary(&self, summary: &RunSummary) -> Result<String, serde_json::Error> {
        let report = JsonReport {
            outcomes: &summary.outcomes,
            halted: summary.halted,
            passed: summary.all_passed(),
        };
        if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
    }
}

/// Render `summary` with the default formatter for `format`
pub fn render(format: ReportFormat, summary: &RunSummary) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(TextFormatter::new().format_summary(summary)),
        ReportFormat::Json => JsonFormatter::new().format_summary(summary),
    }
}
