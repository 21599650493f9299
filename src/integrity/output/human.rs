//! Human-readable output formatter.
//!
//! Formats check results for terminal display with optional color support.

use console::Style;

use super::ReportFormatter;
use crate::integrity::{HealthScore, IntegrityCheckResult, Severity};
use std::io::Write;

/// Formats results for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_style(&self, severity: Severity) -> Style {
        if !self.use_color {
            return Style::new();
        }
        match severity {
            Severity::Hint => Style::new().magenta().dim(),
            Severity::Warning => Style::new().color256(208),
            Severity::Error => Style::new().red().bold(),
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        result: &IntegrityCheckResult,
        writer: &mut W,
    ) -> std::io::Result<()> {
        // Header line per finding: error[check-id]: message
        for finding in &result.findings {
            writeln!(
                writer,
                "{}[{}]: {}",
                self.severity_style(finding.severity)
                    .apply_to(finding.severity.to_string()),
                finding.check_id,
                finding.message
            )?;
        }

        if !result.findings.is_empty() {
            writeln!(writer)?;
        }

        for suggestion in &result.suggestions {
            writeln!(writer, "   = help: {}", suggestion)?;
        }

        if !result.suggestions.is_empty() {
            writeln!(writer)?;
        }

        // Summary
        writeln!(writer, "Health score: {}", HealthScore::from_result(result))?;

        let hint_count = result.hints().count();
        if result.passed && hint_count == 0 {
            writeln!(writer, "No integrity issues found")?;
        } else {
            writeln!(
                writer,
                "Found {} issue(s) and {} hint(s)",
                result.issues.len(),
                hint_count
            )?;
        }

        Ok(())
    }
}
