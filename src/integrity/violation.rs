//! Violations reported by integrity checks.

use super::check::{Category, CheckId, Severity};
use crate::model::EntityId;

/// One data-quality problem found by a check.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The check that produced this violation.
    pub check_id: CheckId,
    /// Severity of this violation.
    pub severity: Severity,
    /// Remediation category.
    pub category: Category,
    /// The offending entity, when it has an id.
    pub entity_id: Option<EntityId>,
    /// Human-readable message; becomes the issue string.
    pub message: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(
        check_id: CheckId,
        severity: Severity,
        category: Category,
        message: impl Into<String>,
    ) -> Self {
        Self {
            check_id,
            severity,
            category,
            entity_id: None,
            message: message.into(),
        }
    }

    /// Attach the offending entity's id.
    pub fn with_entity(mut self, id: Option<&EntityId>) -> Self {
        self.entity_id = id.cloned();
        self
    }

    /// Whether this violation is an issue (fails the run) rather than a hint.
    pub fn is_issue(&self) -> bool {
        self.severity.is_issue()
    }
}
