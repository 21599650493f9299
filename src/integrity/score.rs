//! Health score derived from a result.

use std::fmt;

use super::engine::IntegrityCheckResult;

/// Share of checks that produced no issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthScore {
    pub passed_checks: usize,
    pub total_checks: usize,
}

impl HealthScore {
    /// Compute the score for a result.
    pub fn from_result(result: &IntegrityCheckResult) -> Self {
        Self {
            passed_checks: result.outcomes.iter().filter(|o| o.passed()).count(),
            total_checks: result.outcomes.len(),
        }
    }

    /// Rounded percentage; 100 when no checks ran.
    pub fn percent(&self) -> u8 {
        if self.total_checks == 0 {
            return 100;
        }
        ((self.passed_checks as f64 / self.total_checks as f64) * 100.0).round() as u8
    }
}

impl fmt::Display for HealthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% ({}/{} checks passed)",
            self.percent(),
            self.passed_checks,
            self.total_checks
        )
    }
}
