//! Duplicate politician detection.
//!
//! Names are compared case-insensitively after trimming and collapsing
//! internal whitespace. The first occurrence is kept; every later one is
//! reported against it.

use std::collections::HashMap;

use crate::integrity::{Category, CheckContext, CheckId, IntegrityCheck, Severity, Violation};
use crate::model::{describe_id, Bundle};

/// Detects politicians sharing a name.
pub struct DuplicatePoliticiansCheck;

/// Normalized comparison key for a politician name.
pub(crate) fn name_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl IntegrityCheck for DuplicatePoliticiansCheck {
    fn id(&self) -> CheckId {
        CheckId::new("duplicate-politicians")
    }

    fn name(&self) -> &str {
        "Duplicate Politicians"
    }

    fn description(&self) -> &str {
        "Ensures no two politicians share a name (case-insensitive)"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> Category {
        Category::DuplicateEntry
    }

    fn check(&self, bundle: &Bundle, _ctx: &CheckContext) -> Vec<Violation> {
        let mut seen: HashMap<String, (&str, String)> = HashMap::new();
        let mut violations = Vec::new();

        for politician in &bundle.politicians {
            let label = describe_id(politician.id.as_ref());
            let name = politician.name.as_deref().map(str::trim).unwrap_or("");

            // Nothing to merge here: the record itself needs repair.
            if name.is_empty() {
                violations.push(
                    Violation::new(
                        self.id(),
                        self.default_severity(),
                        Category::MalformedRecord,
                        format!("Politician '{}' has no name", label),
                    )
                    .with_entity(politician.id.as_ref()),
                );
                continue;
            }

            match seen.get(&name_key(name)) {
                Some((first_name, first_label)) => violations.push(
                    self.violation(format!(
                        "Duplicate politician '{}' (id {}) matches '{}' (id {})",
                        name, label, first_name, first_label
                    ))
                    .with_entity(politician.id.as_ref()),
                ),
                None => {
                    seen.insert(name_key(name), (name, label));
                }
            }
        }

        violations
    }
}
