//! Citations behind politician profile claims.

use crate::integrity::{Category, CheckContext, CheckId, IntegrityCheck, Severity, Violation};
use crate::model::Bundle;

/// Hints at politicians whose education, achievement or position claims
/// carry no citation.
pub struct PoliticianClaimSourcesCheck;

impl IntegrityCheck for PoliticianClaimSourcesCheck {
    fn id(&self) -> CheckId {
        CheckId::new("politician-claim-sources")
    }

    fn name(&self) -> &str {
        "Politician Claim Sources"
    }

    fn description(&self) -> &str {
        "Suggests citations for education, achievement and position claims"
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn category(&self) -> Category {
        Category::MissingSources
    }

    fn check(&self, bundle: &Bundle, _ctx: &CheckContext) -> Vec<Violation> {
        bundle
            .politicians
            .iter()
            .filter_map(|p| {
                let missing = p.claims_without_sources();
                if missing.is_empty() {
                    return None;
                }
                Some(
                    self.violation(format!(
                        "Politician '{}' has no citations for {}",
                        p.display_name(),
                        missing.join(", ")
                    ))
                    .with_entity(p.id.as_ref()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrity::checks::fixtures::{ctx, politician};
    use crate::model::Citation;

    #[test]
    fn hints_at_uncited_claims() {
        let mut cited = politician(2, "Cited");
        cited.education_sources = vec![Citation::new("https://uni.example")];
        cited.achievement_sources = vec![Citation::new("https://news.example")];
        cited.position_sources = vec![Citation::new("https://gov.example")];

        let bundle = Bundle {
            politicians: vec![politician(1, "Bare"), cited],
            ..Default::default()
        };

        let violations = PoliticianClaimSourcesCheck.check(&bundle, &ctx());

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Politician 'Bare' has no citations for education, achievements, position"
        );
        assert_eq!(violations[0].severity, Severity::Hint);
    }
}
