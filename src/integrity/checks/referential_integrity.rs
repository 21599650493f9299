//! Referential integrity between records and politicians.
//!
//! Commitments, timeline events, documents and voting records must each
//! reference a politician present in the bundle. A record with no
//! reference at all is reported too.

use std::collections::HashSet;

use crate::integrity::{Category, CheckContext, CheckId, IntegrityCheck, Severity, Violation};
use crate::model::{describe_id, Bundle, CollectionKind, EntityId};

/// Detects records pointing at politicians that are not in the bundle.
pub struct ReferentialIntegrityCheck;

impl ReferentialIntegrityCheck {
    fn check_refs<'a>(
        &self,
        kind: CollectionKind,
        refs: impl Iterator<Item = (Option<&'a EntityId>, Option<&'a EntityId>)>,
        known: &HashSet<&EntityId>,
        out: &mut Vec<Violation>,
    ) {
        for (id, politician_id) in refs {
            let label = describe_id(id);
            match politician_id.filter(|pid| !pid.as_str().is_empty()) {
                None => out.push(
                    self.violation(format!(
                        "{} '{}' has no politician reference",
                        kind.entity_name(),
                        label
                    ))
                    .with_entity(id),
                ),
                Some(pid) if !known.contains(pid) => out.push(
                    self.violation(format!(
                        "{} '{}' references unknown politician '{}'",
                        kind.entity_name(),
                        label,
                        pid
                    ))
                    .with_entity(id),
                ),
                Some(_) => {}
            }
        }
    }
}

impl IntegrityCheck for ReferentialIntegrityCheck {
    fn id(&self) -> CheckId {
        CheckId::new("referential-integrity")
    }

    fn name(&self) -> &str {
        "Referential Integrity"
    }

    fn description(&self) -> &str {
        "Ensures every record references an existing politician"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> Category {
        Category::BrokenReference
    }

    fn check(&self, bundle: &Bundle, _ctx: &CheckContext) -> Vec<Violation> {
        let known: HashSet<&EntityId> = bundle
            .politicians
            .iter()
            .filter_map(|p| p.id.as_ref())
            .collect();

        let mut violations = Vec::new();
        self.check_refs(
            CollectionKind::Commitments,
            bundle
                .commitments
                .iter()
                .map(|c| (c.id.as_ref(), c.politician_id.as_ref())),
            &known,
            &mut violations,
        );
        self.check_refs(
            CollectionKind::TimelineEvents,
            bundle
                .timeline_events
                .iter()
                .map(|e| (e.id.as_ref(), e.politician_id.as_ref())),
            &known,
            &mut violations,
        );
        self.check_refs(
            CollectionKind::Documents,
            bundle
                .documents
                .iter()
                .map(|d| (d.id.as_ref(), d.politician_id.as_ref())),
            &known,
            &mut violations,
        );
        self.check_refs(
            CollectionKind::VotingRecords,
            bundle
                .voting_records
                .iter()
                .map(|v| (v.id.as_ref(), v.politician_id.as_ref())),
            &known,
            &mut violations,
        );
        violations
    }
}
