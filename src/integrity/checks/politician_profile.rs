//! Politician profile completeness.

use crate::integrity::{Category, CheckContext, CheckId, IntegrityCheck, Severity, Violation};
use crate::model::Bundle;

/// Hints at politicians missing party, position or image.
pub struct PoliticianProfileCheck;

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

impl IntegrityCheck for PoliticianProfileCheck {
    fn id(&self) -> CheckId {
        CheckId::new("politician-profile")
    }

    fn name(&self) -> &str {
        "Politician Profile"
    }

    fn description(&self) -> &str {
        "Suggests filling in party, position and image for each politician"
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn category(&self) -> Category {
        Category::IncompleteProfile
    }

    fn check(&self, bundle: &Bundle, _ctx: &CheckContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for p in &bundle.politicians {
            let missing: Vec<&str> = [
                ("party", &p.party),
                ("position", &p.position),
                ("image", &p.image),
            ]
            .into_iter()
            .filter(|(_, value)| is_blank(value))
            .map(|(field, _)| field)
            .collect();

            if !missing.is_empty() {
                violations.push(
                    self.violation(format!(
                        "Politician '{}' is missing {}",
                        p.display_name(),
                        missing.join(", ")
                    ))
                    .with_entity(p.id.as_ref()),
                );
            }
        }

        violations
    }
}
