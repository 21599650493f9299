//! Integrity check definitions.
//!
//! This module provides the core traits and types for defining checks:
//!
//! - [`IntegrityCheck`] - The trait that all checks implement
//! - [`CheckId`] - Unique identifier for a check
//! - [`Severity`] - Severity level for violations (Hint, Warning, Error)
//! - [`Category`] - Remediation category a violation rolls up into
//! - [`CheckContext`] - Values injected into every run (reference time, thresholds)

use chrono::{DateTime, Utc};

use super::violation::Violation;
use crate::model::Bundle;

/// Proportion of unverified documents above which each one is reported.
pub const DEFAULT_UNVERIFIED_DOCUMENT_THRESHOLD: f64 = 0.5;

/// Unique identifier for a check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckId(pub String);

impl CheckId {
    /// Create a new check ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Suggestion only, does not fail the run.
    Hint,
    /// Reported as an issue and fails the run.
    Warning,
    /// Reported as an issue and fails the run.
    Error,
}

impl Severity {
    /// Whether violations of this severity count as issues.
    pub fn is_issue(&self) -> bool {
        !matches!(self, Severity::Hint)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Remediation category. Each category maps to exactly one suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MalformedRecord,
    BrokenReference,
    DuplicateEntry,
    MissingSources,
    InvalidDate,
    UnverifiedDocuments,
    IncompleteProfile,
    EmptyCollection,
}

impl Category {
    /// Stable kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MalformedRecord => "malformed-record",
            Category::BrokenReference => "broken-reference",
            Category::DuplicateEntry => "duplicate-entry",
            Category::MissingSources => "missing-sources",
            Category::InvalidDate => "invalid-date",
            Category::UnverifiedDocuments => "unverified-documents",
            Category::IncompleteProfile => "incomplete-profile",
            Category::EmptyCollection => "empty-collection",
        }
    }

    /// The remediation hint shown for this category.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Category::MalformedRecord => "Repair or remove malformed records returned by the API",
            Category::BrokenReference => {
                "Link every record to an existing politician or remove orphaned records"
            }
            Category::DuplicateEntry => "Merge or remove duplicate politician entries",
            Category::MissingSources => "Add source citations to strengthen credibility",
            Category::InvalidDate => "Correct malformed or future-dated entries",
            Category::UnverifiedDocuments => "Review and verify pending documents",
            Category::IncompleteProfile => {
                "Complete politician profiles with party, position and photo"
            }
            Category::EmptyCollection => "Import data for empty collections to improve coverage",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Values injected into a run so checks never read ambient state.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckContext {
    /// Reference time for date sanity checks.
    pub now: DateTime<Utc>,
    /// See [`DEFAULT_UNVERIFIED_DOCUMENT_THRESHOLD`].
    pub unverified_document_threshold: f64,
}

impl CheckContext {
    /// Create a context with the default thresholds.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            unverified_document_threshold: DEFAULT_UNVERIFIED_DOCUMENT_THRESHOLD,
        }
    }

    /// Override the unverified-document threshold (clamped to 0.0..=1.0).
    pub fn with_document_threshold(mut self, threshold: f64) -> Self {
        self.unverified_document_threshold = if threshold.is_nan() {
            DEFAULT_UNVERIFIED_DOCUMENT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }
}

/// A check that scans a bundle for data-quality problems.
///
/// Checks are pure: they read the bundle and context and return violations
/// in discovery order. Data problems are never returned as errors.
pub trait IntegrityCheck: Send + Sync {
    /// Unique identifier for this check.
    fn id(&self) -> CheckId;

    /// Human-readable name of the check.
    fn name(&self) -> &str;

    /// Description of what this check verifies.
    fn description(&self) -> &str;

    /// Default severity for this check.
    fn default_severity(&self) -> Severity;

    /// Suggestion category this check's violations fall into.
    fn category(&self) -> Category;

    /// Scan the bundle and return any violations.
    fn check(&self, bundle: &Bundle, ctx: &CheckContext) -> Vec<Violation>;

    /// Build a violation carrying this check's id, severity and category.
    fn violation(&self, message: impl Into<String>) -> Violation
    where
        Self: Sized,
    {
        Violation::new(self.id(), self.default_severity(), self.category(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn check_id_equality() {
        let id1 = CheckId::new("test-check");
        let id2 = CheckId::new("test-check");
        let id3 = CheckId::new("other-check");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn check_id_display() {
        let id = CheckId::new("my-check");
        assert_eq!(format!("{}", id), "my-check");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Hint < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn only_hints_are_not_issues() {
        assert!(!Severity::Hint.is_issue());
        assert!(Severity::Warning.is_issue());
        assert!(Severity::Error.is_issue());
    }

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Hint), "hint");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Error), "error");
    }

    #[test]
    fn missing_sources_suggestion_text() {
        assert_eq!(
            Category::MissingSources.suggestion(),
            "Add source citations to strengthen credibility"
        );
        assert_eq!(Category::MissingSources.to_string(), "missing-sources");
    }

    #[test]
    fn context_threshold_is_clamped() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            CheckContext::new(now).unverified_document_threshold,
            DEFAULT_UNVERIFIED_DOCUMENT_THRESHOLD
        );
        assert_eq!(
            CheckContext::new(now)
                .with_document_threshold(1.7)
                .unverified_document_threshold,
            1.0
        );
        assert_eq!(
            CheckContext::new(now)
                .with_document_threshold(f64::NAN)
                .unverified_document_threshold,
            DEFAULT_UNVERIFIED_DOCUMENT_THRESHOLD
        );
    }
}
