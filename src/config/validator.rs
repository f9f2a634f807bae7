//! Configuration validation rules.
//!
//! - `layout.projects_dir` and `layout.registry_file` must be non-empty
//! - `layout.registry_file` must be a bare file name
//! - an enabled format check with an empty `check_word` is a warning, since
//!   no program can pass it

use crate::config::schema::HubslotConfig;
use crate::error::{HubslotError, Result};

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Validation finding with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable message
    pub message: String,
    pub severity: Severity,
}

/// Validate a configuration and return all findings.
pub fn validate_config(config: &HubslotConfig) -> Vec<ValidationError> {
    let mut findings = Vec::new();

    if config.layout.projects_dir.as_os_str().is_empty() {
        findings.push(ValidationError {
            rule: "empty-projects-dir".to_string(),
            message: "layout.projects_dir must not be empty".to_string(),
            severity: Severity::Error,
        });
    }

    let registry_file = config.layout.registry_file.trim();
    if registry_file.is_empty() {
        findings.push(ValidationError {
            rule: "empty-registry-file".to_string(),
            message: "layout.registry_file must not be empty".to_string(),
            severity: Severity::Error,
        });
    } else if registry_file.contains(['/', '\\']) {
        findings.push(ValidationError {
            rule: "registry-file-path".to_string(),
            message: format!(
                "layout.registry_file '{}' must be a file name inside projects_dir",
                registry_file
            ),
            severity: Severity::Error,
        });
    }

    if config.resolve.do_check && config.resolve.check_word.is_empty() {
        findings.push(ValidationError {
            rule: "empty-check-word".to_string(),
            message: "resolve.do_check is enabled but resolve.check_word is empty; every slot will fail the format check".to_string(),
            severity: Severity::Warning,
        });
    }

    findings
}

/// Validate and return the first error-level finding as an error.
///
/// Warnings are returned for display.
pub fn validate(config: &HubslotConfig) -> Result<Vec<ValidationError>> {
    let (errors, warnings): (Vec<_>, Vec<_>) = validate_config(config)
        .into_iter()
        .partition(|f| f.severity == Severity::Error);

    match errors.into_iter().next() {
        Some(first) => Err(HubslotError::ConfigValidationError {
            message: first.message,
        }),
        None => Ok(warnings),
    }
}
