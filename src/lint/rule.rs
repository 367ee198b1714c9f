//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Hint, Warning, Error)
//! - [`RuleType`] - What kind of issue a rule reports

use serde_json::Value;

use super::context::RuleContext;
use crate::error::Result;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational hint, does not affect validity.
    Hint,
    /// Warning that should be addressed.
    Warning,
    /// Error that fails the lint run.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Hint => "hint",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.pad(label)
    }
}

/// The kind of issue a rule reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    /// Code that will cause errors or confusing behavior.
    Problem,
    /// Something that could be done in a better way.
    Suggestion,
    /// Whitespace and formatting.
    Layout,
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RuleType::Problem => "problem",
            RuleType::Suggestion => "suggestion",
            RuleType::Layout => "layout",
        };
        f.pad(label)
    }
}

/// A lint rule that inspects one compilation unit at a time.
///
/// Rules report through the [`RuleContext`] they are given. Reports name
/// one of the rule's message templates; the context renders it.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// What kind of issue this rule reports.
    fn rule_type(&self) -> RuleType {
        RuleType::Problem
    }

    /// Severity used when the configuration does not set one.
    fn default_severity(&self) -> Severity;

    /// Message templates keyed by message id.
    ///
    /// Templates may reference report data as `{{ name }}`.
    fn messages(&self) -> &'static [(&'static str, &'static str)];

    /// JSON schema of the options array this rule accepts.
    fn options_schema(&self) -> Value {
        Value::Array(vec![])
    }

    /// Options used when the configuration supplies none.
    fn default_options(&self) -> Value {
        Value::Null
    }

    /// Reject options this rule cannot run with.
    fn validate_options(&self, _options: &Value) -> Result<()> {
        Ok(())
    }

    /// Inspect the unit in `ctx` and report findings through it.
    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<()>;

    /// Look up a message template by id.
    fn message_template(&self, message_id: &str) -> Option<&'static str> {
        self.messages()
            .iter()
            .find(|(id, _)| *id == message_id)
            .map(|(_, template)| *template)
    }
}
