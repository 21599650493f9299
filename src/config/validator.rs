//! Configuration validation rules.
//!
//! - Disabled check ids must name registered checks
//! - The document threshold must be a share between 0 and 1
//! - The timeout must be positive
//! - A base URL must be http or https

use crate::config::schema::AuditConfig;
use crate::error::{CivicAuditError, Result};
use crate::integrity::{CheckId, CheckRegistry};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &AuditConfig, registry: &CheckRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for id in &config.checks.disabled {
        if registry.get(&CheckId::new(id.as_str())).is_none() {
            errors.push(ValidationError::new(
                "unknown-check",
                format!("checks.disabled names unknown check '{}'", id),
            ));
        }
    }

    let threshold = config.checks.unverified_document_threshold;
    if !(0.0..=1.0).contains(&threshold) {
        errors.push(ValidationError::new(
            "invalid-threshold",
            format!(
                "checks.unverified_document_threshold must be between 0 and 1, got {}",
                threshold
            ),
        ));
    }

    if config.api.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "invalid-timeout",
            "api.timeout_secs must be greater than 0".to_string(),
        ));
    }

    if let Some(url) = &config.api.base_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(ValidationError::new(
                "invalid-base-url",
                format!("api.base_url must start with http:// or https://, got '{}'", url),
            ));
        }
    }

    errors
}

/// Validate, folding every failure into one error.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &AuditConfig, registry: &CheckRegistry) -> Result<()> {
    let errors = validate_config(config, registry);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        Err(CivicAuditError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
