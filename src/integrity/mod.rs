//! Data-integrity checking for entity bundles.
//!
//! This module provides the integrity engine through a pluggable
//! check-based system.
//!
//! # Overview
//!
//! The integrity system consists of:
//!
//! - **Checks** - Individual validation rules ([`IntegrityCheck`] trait)
//! - **Registry** - Ordered collection of checks ([`CheckRegistry`])
//! - **Engine** - Runs a registry over a bundle ([`evaluate`])
//! - **Violations** - Findings with severity and category ([`Violation`])
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use civic_audit::integrity::{evaluate, CheckContext, CheckRegistry};
//! use civic_audit::model::Bundle;
//!
//! let registry = CheckRegistry::with_builtins();
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//!
//! let result = evaluate(&registry, &Bundle::default(), &CheckContext::new(now));
//! assert!(result.passed);
//! assert!(result.issues.is_empty());
//! ```

pub mod check;
pub mod checks;
pub mod engine;
pub mod output;
pub mod registry;
pub mod score;
pub mod violation;

pub use check::{
    Category, CheckContext, CheckId, IntegrityCheck, Severity,
    DEFAULT_UNVERIFIED_DOCUMENT_THRESHOLD,
};
pub use checks::{
    CommitmentCitationsCheck, DataCoverageCheck, DateSanityCheck, DocumentVerificationCheck,
    DuplicatePoliticiansCheck, PoliticianClaimSourcesCheck, PoliticianProfileCheck,
    ReferentialIntegrityCheck, WellFormedRecordsCheck,
};
pub use engine::{evaluate, CheckOutcome, IntegrityCheckResult};
pub use output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
pub use registry::CheckRegistry;
pub use score::HealthScore;
pub use violation::Violation;
