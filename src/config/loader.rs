//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::AuditConfig;
use crate::error::{CivicAuditError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding civic-audit configuration inside a project.
pub const CONFIG_DIR: &str = ".civic-audit";

/// Paths to configuration files in merge order (later overrides earlier).
///
/// 1. Project config (`.civic-audit/config.yml`)
/// 2. Local overrides (`.civic-audit/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Project config: .civic-audit/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .civic-audit/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let dir = project_root.join(CONFIG_DIR);
        Self {
            project: existing(dir.join("config.yml")),
            project_local: existing(dir.join("config.local.yml")),
        }
    }

    /// Existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// True when neither file exists.
    pub fn is_empty(&self) -> bool {
        self.project.is_none() && self.project_local.is_none()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// A directory containing `.civic-audit` wins; otherwise the nearest
/// directory containing `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CivicAuditError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CivicAuditError::Io(e)
        }
    })
}

/// Parse YAML content into an [`AuditConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<AuditConfig> {
    serde_yaml::from_str(content).map_err(|e| CivicAuditError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<AuditConfig> {
    parse_config(&read(path)?, path)
}

/// Load a config file as a raw YAML value for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    serde_yaml::from_str(&read(path)?).map_err(|e| CivicAuditError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project and local config files.
///
/// A project without any config file gets the defaults.
pub fn load_merged_config(project_root: &Path) -> Result<AuditConfig> {
    let paths = ConfigPaths::discover(project_root);

    if paths.is_empty() {
        tracing::debug!("No config under {}, using defaults", project_root.display());
        return Ok(AuditConfig::default());
    }

    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    serde_yaml::from_value(merge_configs(&layers)).map_err(|e| {
        CivicAuditError::ConfigParseError {
            path: project_root.join(CONFIG_DIR).join("config.yml"),
            message: format!("Failed to parse merged config: {}", e),
        }
    })
}

/// Load config with an optional path override.
///
/// An override is loaded on its own, without merging, and must exist.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<AuditConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}
