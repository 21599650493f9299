//! Commitment source-citation completeness.

use crate::integrity::{Category, CheckContext, CheckId, IntegrityCheck, Severity, Violation};
use crate::model::{describe_id, ids::cited, Bundle};

/// Requires at least one usable citation on every commitment.
pub struct CommitmentCitationsCheck;

impl IntegrityCheck for CommitmentCitationsCheck {
    fn id(&self) -> CheckId {
        CheckId::new("commitment-citations")
    }

    fn name(&self) -> &str {
        "Commitment Citations"
    }

    fn description(&self) -> &str {
        "Ensures every commitment carries at least one source citation"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> Category {
        Category::MissingSources
    }

    fn check(&self, bundle: &Bundle, _ctx: &CheckContext) -> Vec<Violation> {
        bundle
            .commitments
            .iter()
            .filter(|c| cited(&c.sources) == 0)
            .map(|c| {
                self.violation(format!(
                    "Commitment '{}' has no source citations",
                    describe_id(c.id.as_ref())
                ))
                .with_entity(c.id.as_ref())
            })
            .collect()
    }
}
