//! civic-audit - Data-integrity auditing for civic-transparency datasets.
//!
//! A bundle of politicians, commitments, timeline events, documents and
//! voting records is run through an ordered set of integrity checks. The
//! result says whether the data passed, lists the issues found and offers
//! one remediation suggestion per kind of problem.
//!
//! # Modules
//!
//! - [`api`] - REST client and concurrent bundle fetch
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, layering, and validation
//! - [`error`] - Error types and result aliases
//! - [`integrity`] - Checks, registry, engine, and report formatters
//! - [`model`] - Entity types and the bundle
//! - [`ui`] - Terminal output, spinners, and a mock for tests
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use civic_audit::integrity::{evaluate, CheckContext, CheckRegistry};
//! use civic_audit::model::Bundle;
//!
//! let bundle = Bundle::from_json_str(r#"{
//!     "politicians": [{"id": 1, "name": "Ada"}],
//!     "commitments": [{"id": "c1", "politician_id": 1}]
//! }"#).unwrap();
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
//! let result = evaluate(&CheckRegistry::with_builtins(), &bundle, &CheckContext::new(now));
//!
//! assert!(!result.passed);
//! assert_eq!(result.issues, ["Commitment 'c1' has no source citations"]);
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod integrity;
pub mod model;
pub mod ui;

pub use error::{CivicAuditError, Result};
