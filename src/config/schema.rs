//! Configuration schema definitions.
//!
//! These structs map to `.civic-audit/config.yml`. Every section and field
//! is optional; a missing file behaves like an empty one.

use serde::{Deserialize, Serialize};

use crate::integrity::{OutputFormat, DEFAULT_UNVERIFIED_DOCUMENT_THRESHOLD};

/// Environment variable consulted for the bearer token when none is configured.
pub const DEFAULT_TOKEN_ENV: &str = "CIVIC_API_TOKEN";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Backend connection settings
    pub api: ApiSettings,

    /// Check selection and tuning
    pub checks: CheckSettings,

    /// Report rendering
    pub output: OutputSettings,
}

/// Where and how to reach the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Root URL of the REST API, e.g. `https://api.example.org/v1`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Name of the environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Ask the backend to include unpublished politicians
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_drafts: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            token_env: default_token_env(),
            timeout_secs: default_timeout(),
            include_drafts: false,
        }
    }
}

impl ApiSettings {
    /// Read the bearer token from the configured environment variable.
    ///
    /// Empty values count as unset.
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}

/// Which checks run and how they are tuned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSettings {
    /// Check ids to leave out of the registry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<String>,

    /// Share of unverified documents above which the collection is flagged
    #[serde(default = "default_document_threshold")]
    pub unverified_document_threshold: f64,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            disabled: Vec::new(),
            unverified_document_threshold: default_document_threshold(),
        }
    }
}

/// Report rendering defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Default format when `--format` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_document_threshold() -> f64 {
    DEFAULT_UNVERIFIED_DOCUMENT_THRESHOLD
}

fn is_false(b: &bool) -> bool {
    !*b
}
