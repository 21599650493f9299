//! Document verification completeness.
//!
//! A few unverified documents are normal while review is in progress, so
//! this check stays quiet until the unverified share exceeds the configured
//! threshold. Past that point every unverified document is listed as a hint.

use crate::integrity::{Category, CheckContext, CheckId, IntegrityCheck, Severity, Violation};
use crate::model::{describe_id, Bundle};

/// Hints at unverified documents once they exceed the threshold share.
pub struct DocumentVerificationCheck;

impl IntegrityCheck for DocumentVerificationCheck {
    fn id(&self) -> CheckId {
        CheckId::new("document-verification")
    }

    fn name(&self) -> &str {
        "Document Verification"
    }

    fn description(&self) -> &str {
        "Flags unverified documents when their share exceeds the threshold"
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn category(&self) -> Category {
        Category::UnverifiedDocuments
    }

    fn check(&self, bundle: &Bundle, ctx: &CheckContext) -> Vec<Violation> {
        let total = bundle.documents.len();
        if total == 0 {
            return Vec::new();
        }

        let unverified: Vec<_> = bundle
            .documents
            .iter()
            .filter(|d| !d.is_verified())
            .collect();
        let share = unverified.len() as f64 / total as f64;

        if share <= ctx.unverified_document_threshold {
            return Vec::new();
        }

        tracing::debug!(
            "{} of {} documents unverified (threshold {:.2})",
            unverified.len(),
            total,
            ctx.unverified_document_threshold
        );

        unverified
            .iter()
            .map(|d| {
                self.violation(format!(
                    "Document '{}' is not verified ({} of {} documents unverified)",
                    describe_id(d.id.as_ref()),
                    unverified.len(),
                    total
                ))
                .with_entity(d.id.as_ref())
            })
            .collect()
    }
}
