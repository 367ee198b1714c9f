//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type, the report a rule
//! hands back to the host: a message id, the data interpolated into the
//! message template, the rendered message and a source location.

use std::collections::BTreeMap;

use super::rule::{RuleId, Severity};
use super::span::Span;

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Key of the rule message template this diagnostic was rendered from.
    pub message_id: Option<String>,
    /// Values substituted into the message template.
    pub data: BTreeMap<String, String>,
    /// Human-readable message.
    pub message: String,
    /// Optional source location.
    pub span: Option<Span>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message_id: None,
            data: BTreeMap::new(),
            message: message.into(),
            span: None,
        }
    }

    /// Add a source span to this diagnostic.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Record the message template this diagnostic came from.
    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    /// Attach template data.
    pub fn with_data(mut self, data: BTreeMap<String, String>) -> Self {
        self.data = data;
        self
    }
}
