//! Empty collection detection.
//!
//! Absent data is not a failure, but it is worth a hint: an audit over an
//! empty collection proves nothing about it.

use crate::integrity::{Category, CheckContext, CheckId, IntegrityCheck, Severity, Violation};
use crate::model::{Bundle, CollectionKind};

/// Hints at collections with no records.
pub struct DataCoverageCheck;

impl IntegrityCheck for DataCoverageCheck {
    fn id(&self) -> CheckId {
        CheckId::new("data-coverage")
    }

    fn name(&self) -> &str {
        "Data Coverage"
    }

    fn description(&self) -> &str {
        "Reports collections that contain no records"
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn category(&self) -> Category {
        Category::EmptyCollection
    }

    fn check(&self, bundle: &Bundle, _ctx: &CheckContext) -> Vec<Violation> {
        CollectionKind::ALL
            .iter()
            .filter(|kind| {
                bundle.len_of(**kind) == 0 && !bundle.malformed.iter().any(|m| m.kind == **kind)
            })
            .map(|kind| self.violation(format!("No {} in the bundle", kind.key().replace('_', " "))))
            .collect()
    }
}
