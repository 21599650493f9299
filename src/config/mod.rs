//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use civic_audit::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".civic-audit");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "api:\n  timeout_secs: 10").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.api.timeout_secs, 10);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.civic-audit/config.yml`)
//! 2. Local overrides (`.civic-audit/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{
    ApiSettings, AuditConfig, CheckSettings, OutputSettings, DEFAULT_TOKEN_ENV,
};
pub use validator::{validate, validate_config, ValidationError};
