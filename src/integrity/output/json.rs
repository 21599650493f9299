//! JSON output formatter.
//!
//! Formats check results as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::integrity::{HealthScore, IntegrityCheckResult};
use serde::Serialize;
use std::io::Write;

/// Formats results as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    passed: bool,
    health_score: u8,
    issues: &'a [String],
    suggestions: &'a [String],
    findings: Vec<JsonFinding<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    check_id: &'a str,
    severity: String,
    category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_id: Option<&'a str>,
    message: &'a str,
}

#[derive(Serialize)]
struct JsonSummary {
    total_checks: usize,
    passed_checks: usize,
    issues: usize,
    hints: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        result: &IntegrityCheckResult,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let score = HealthScore::from_result(result);

        let findings = result
            .findings
            .iter()
            .map(|v| JsonFinding {
                check_id: v.check_id.as_str(),
                severity: v.severity.to_string(),
                category: v.category.as_str(),
                entity_id: v.entity_id.as_ref().map(|id| id.as_str()),
                message: &v.message,
            })
            .collect();

        let output = JsonOutput {
            passed: result.passed,
            health_score: score.percent(),
            issues: &result.issues,
            suggestions: &result.suggestions,
            findings,
            summary: JsonSummary {
                total_checks: score.total_checks,
                passed_checks: score.passed_checks,
                issues: result.issues.len(),
                hints: result.hints().count(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
