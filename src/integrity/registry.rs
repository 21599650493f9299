//! Check registry.
//!
//! The [`CheckRegistry`] stores checks in registration order. That order
//! is the order issues appear in a result, so the registry is a list
//! rather than a map.

use super::check::{CheckId, IntegrityCheck};
use super::checks::{
    CommitmentCitationsCheck, DataCoverageCheck, DateSanityCheck, DocumentVerificationCheck,
    DuplicatePoliticiansCheck, PoliticianClaimSourcesCheck, PoliticianProfileCheck,
    ReferentialIntegrityCheck, WellFormedRecordsCheck,
};

/// Ordered registry of integrity checks.
pub struct CheckRegistry {
    checks: Vec<Box<dyn IntegrityCheck>>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a registry with all built-in checks.
    ///
    /// Issue-producing checks come first, hint-only checks last.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(WellFormedRecordsCheck));
        registry.register(Box::new(ReferentialIntegrityCheck));
        registry.register(Box::new(DuplicatePoliticiansCheck));
        registry.register(Box::new(CommitmentCitationsCheck));
        registry.register(Box::new(DateSanityCheck));
        registry.register(Box::new(DocumentVerificationCheck));
        registry.register(Box::new(PoliticianClaimSourcesCheck));
        registry.register(Box::new(PoliticianProfileCheck));
        registry.register(Box::new(DataCoverageCheck));
        registry
    }

    /// Register a check.
    ///
    /// A check whose id is already registered replaces the existing one in
    /// its original position.
    pub fn register(&mut self, check: Box<dyn IntegrityCheck>) {
        let id = check.id();
        match self.checks.iter().position(|c| c.id() == id) {
            Some(pos) => self.checks[pos] = check,
            None => self.checks.push(check),
        }
    }

    /// Drop every check whose id appears in `disabled`.
    pub fn without<S: AsRef<str>>(mut self, disabled: &[S]) -> Self {
        self.checks
            .retain(|c| !disabled.iter().any(|d| d.as_ref() == c.id().as_str()));
        self
    }

    /// Get a check by ID.
    pub fn get(&self, id: &CheckId) -> Option<&dyn IntegrityCheck> {
        self.checks
            .iter()
            .find(|c| &c.id() == id)
            .map(|c| c.as_ref())
    }

    /// Iterate over all checks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn IntegrityCheck> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}
