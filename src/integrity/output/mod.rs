//! Result formatters.
//!
//! This module provides formatters for rendering an
//! [`IntegrityCheckResult`](crate::integrity::IntegrityCheckResult) in
//! different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::integrity::IntegrityCheckResult;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output format for check results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting check results.
pub trait ReportFormatter {
    /// Format a result to the given writer.
    fn format<W: Write>(&self, result: &IntegrityCheckResult, writer: &mut W)
        -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
