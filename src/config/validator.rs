//! Configuration validation.
//!
//! Checks a [`LintConfig`] against the rules that are actually available:
//! - every configured rule must exist
//! - configured options must be accepted by the rule

use crate::config::schema::LintConfig;
use crate::error::{Result, TscLintError};
use crate::lint::{RuleId, RuleRegistry};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule the error is about.
    pub rule: String,
    /// Human-readable error message.
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &LintConfig, registry: &RuleRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, setting) in &config.rules {
        let Some(rule) = registry.get(&RuleId::new(id.as_str())) else {
            errors.push(ValidationError {
                rule: id.clone(),
                message: format!("Unknown rule '{}'", id),
            });
            continue;
        };

        if let Some(options) = &setting.options {
            if let Err(e) = rule.validate_options(options) {
                errors.push(ValidationError {
                    rule: id.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    errors
}

/// Validate a configuration.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any check fails.
pub fn validate(config: &LintConfig, registry: &RuleRegistry) -> Result<()> {
    let errors = validate_config(config, registry);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(TscLintError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
