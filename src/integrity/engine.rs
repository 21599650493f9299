//! The integrity check engine.
//!
//! [`evaluate`] runs every check in a registry over one bundle and folds
//! the violations into an [`IntegrityCheckResult`]. It performs no I/O and
//! keeps no state between calls: the same registry, bundle and context
//! always produce the same result.

use std::collections::HashSet;

use super::check::{CheckContext, CheckId};
use super::registry::CheckRegistry;
use super::violation::Violation;
use crate::model::Bundle;

/// Per-check tally for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// The check's id.
    pub id: CheckId,
    /// The check's human-readable name.
    pub name: String,
    /// Violations that count as issues.
    pub issues: usize,
    /// Hint-only violations.
    pub hints: usize,
}

impl CheckOutcome {
    /// A check passes when it produced no issues; hints do not fail it.
    pub fn passed(&self) -> bool {
        self.issues == 0
    }
}

/// Output of one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrityCheckResult {
    /// True iff `issues` is empty.
    pub passed: bool,
    /// One message per issue, in check registration then discovery order.
    pub issues: Vec<String>,
    /// One remediation hint per distinct category, in first-seen order.
    pub suggestions: Vec<String>,
    /// Every violation, hints included, in the same order as `issues`.
    pub findings: Vec<Violation>,
    /// One entry per check that ran, in registration order.
    pub outcomes: Vec<CheckOutcome>,
}

impl IntegrityCheckResult {
    /// Hint-only findings.
    pub fn hints(&self) -> impl Iterator<Item = &Violation> {
        self.findings.iter().filter(|v| !v.is_issue())
    }
}

/// Run every check in `registry` against `bundle`.
pub fn evaluate(
    registry: &CheckRegistry,
    bundle: &Bundle,
    ctx: &CheckContext,
) -> IntegrityCheckResult {
    let mut findings = Vec::new();
    let mut outcomes = Vec::with_capacity(registry.len());

    for check in registry.iter() {
        let violations = check.check(bundle, ctx);
        let issues = violations.iter().filter(|v| v.is_issue()).count();

        tracing::debug!(
            "Check '{}' found {} issue(s) and {} hint(s)",
            check.id(),
            issues,
            violations.len() - issues
        );

        outcomes.push(CheckOutcome {
            id: check.id(),
            name: check.name().to_string(),
            issues,
            hints: violations.len() - issues,
        });
        findings.extend(violations);
    }

    let issues: Vec<String> = findings
        .iter()
        .filter(|v| v.is_issue())
        .map(|v| v.message.clone())
        .collect();

    let mut seen = HashSet::new();
    let suggestions = findings
        .iter()
        .filter(|v| seen.insert(v.category))
        .map(|v| v.category.suggestion().to_string())
        .collect();

    IntegrityCheckResult {
        passed: issues.is_empty(),
        issues,
        suggestions,
        findings,
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrity::checks::fixtures::{commitment, ctx, politician};
    use crate::integrity::{Category, IntegrityCheck, Severity};

    struct FixedCheck {
        id: &'static str,
        severity: Severity,
        category: Category,
        messages: Vec<&'static str>,
    }

    impl IntegrityCheck for FixedCheck {
        fn id(&self) -> CheckId {
            CheckId::new(self.id)
        }
        fn name(&self) -> &str {
            self.id
        }
        fn description(&self) -> &str {
            "Returns fixed violations"
        }
        fn default_severity(&self) -> Severity {
            self.severity
        }
        fn category(&self) -> Category {
            self.category
        }
        fn check(&self, _bundle: &Bundle, _ctx: &CheckContext) -> Vec<Violation> {
            self.messages.iter().map(|m| self.violation(*m)).collect()
        }
    }

    fn fixed(
        id: &'static str,
        severity: Severity,
        category: Category,
        messages: Vec<&'static str>,
    ) -> Box<dyn IntegrityCheck> {
        Box::new(FixedCheck {
            id,
            severity,
            category,
            messages,
        })
    }

    #[test]
    fn empty_registry_passes() {
        let result = evaluate(&CheckRegistry::new(), &Bundle::default(), &ctx());
        assert!(result.passed);
        assert!(result.issues.is_empty());
        assert!(result.suggestions.is_empty());
        assert!(result.outcomes.is_empty());
    }

    #[test]
    fn issues_follow_registration_then_discovery_order() {
        let mut registry = CheckRegistry::new();
        registry.register(fixed("b", Severity::Error, Category::DuplicateEntry, vec!["b1", "b2"]));
        registry.register(fixed("a", Severity::Warning, Category::InvalidDate, vec!["a1"]));

        let result = evaluate(&registry, &Bundle::default(), &ctx());

        assert!(!result.passed);
        assert_eq!(result.issues, vec!["b1", "b2", "a1"]);
        assert_eq!(result.outcomes[0].issues, 2);
        assert_eq!(result.outcomes[1].issues, 1);
    }

    #[test]
    fn hints_do_not_fail_but_do_suggest() {
        let mut registry = CheckRegistry::new();
        registry.register(fixed("h", Severity::Hint, Category::EmptyCollection, vec!["nothing here"]));

        let result = evaluate(&registry, &Bundle::default(), &ctx());

        assert!(result.passed);
        assert!(result.issues.is_empty());
        assert_eq!(result.hints().count(), 1);
        assert_eq!(
            result.suggestions,
            vec![Category::EmptyCollection.suggestion()]
        );
        assert!(result.outcomes[0].passed());
        assert_eq!(result.outcomes[0].hints, 1);
    }

    #[test]
    fn suggestions_are_deduplicated_in_first_seen_order() {
        let mut registry = CheckRegistry::new();
        registry.register(fixed("x", Severity::Error, Category::MissingSources, vec!["x1", "x2"]));
        registry.register(fixed("y", Severity::Error, Category::InvalidDate, vec!["y1"]));
        registry.register(fixed("z", Severity::Hint, Category::MissingSources, vec!["z1"]));

        let result = evaluate(&registry, &Bundle::default(), &ctx());

        assert_eq!(
            result.suggestions,
            vec![
                Category::MissingSources.suggestion(),
                Category::InvalidDate.suggestion()
            ]
        );
    }

    #[test]
    fn builtins_on_scenario_bundle() {
        let bundle = Bundle {
            politicians: vec![politician(1, "A"), politician(2, "A")],
            commitments: vec![commitment("c1", 1, &[])],
            ..Default::default()
        };

        let result = evaluate(&CheckRegistry::with_builtins(), &bundle, &ctx());

        assert!(!result.passed);
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues[0].starts_with("Duplicate politician 'A'"));
        assert_eq!(result.issues[1], "Commitment 'c1' has no source citations");
        let citation_hints = result
            .suggestions
            .iter()
            .filter(|s| s.as_str() == Category::MissingSources.suggestion())
            .count();
        assert_eq!(citation_hints, 1);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let bundle = Bundle {
            politicians: vec![politician(1, "A"), politician(2, "a")],
            commitments: vec![commitment("c1", 3, &[])],
            ..Default::default()
        };
        let registry = CheckRegistry::with_builtins();

        let first = evaluate(&registry, &bundle, &ctx());
        let second = evaluate(&registry, &bundle, &ctx());

        assert_eq!(first, second);
    }
}
