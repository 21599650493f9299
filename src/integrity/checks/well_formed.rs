//! Malformed record detection.
//!
//! This check reports collection elements that are not records at all
//! (strings, numbers, arrays). Wrong-typed fields inside a record are left
//! to the check that reads them.

use crate::integrity::{Category, CheckContext, CheckId, IntegrityCheck, Severity, Violation};
use crate::model::Bundle;

/// Reports records that failed to decode.
pub struct WellFormedRecordsCheck;

impl IntegrityCheck for WellFormedRecordsCheck {
    fn id(&self) -> CheckId {
        CheckId::new("well-formed-records")
    }

    fn name(&self) -> &str {
        "Well-Formed Records"
    }

    fn description(&self) -> &str {
        "Ensures every record in every collection can be read"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> Category {
        Category::MalformedRecord
    }

    fn check(&self, bundle: &Bundle, _ctx: &CheckContext) -> Vec<Violation> {
        bundle
            .malformed
            .iter()
            .map(|record| {
                self.violation(format!(
                    "{} #{} in '{}' could not be read: {}",
                    record.kind.entity_name(),
                    record.index + 1,
                    record.kind,
                    record.reason
                ))
            })
            .collect()
    }
}
