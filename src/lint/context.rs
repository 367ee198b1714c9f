//! Per-unit rule execution context.
//!
//! A [`RuleContext`] is what a rule sees while it checks one compilation
//! unit: the unit itself, the compiler service, its options, and a
//! `report` callback that collects [`LintDiagnostic`]s.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::diagnostic::LintDiagnostic;
use super::rule::{LintRule, Severity};
use super::span::{Location, Span};
use crate::compiler::{CompilationUnit, SemanticDiagnostics};
use crate::error::{Result, TscLintError};

/// Context handed to [`LintRule::check`].
pub struct RuleContext<'a> {
    rule: &'a dyn LintRule,
    severity: Severity,
    unit: &'a CompilationUnit,
    program: &'a dyn SemanticDiagnostics,
    options: &'a Value,
    reports: Vec<LintDiagnostic>,
}

impl<'a> RuleContext<'a> {
    /// Create a context for running `rule` over `unit`.
    pub fn new(
        rule: &'a dyn LintRule,
        severity: Severity,
        unit: &'a CompilationUnit,
        program: &'a dyn SemanticDiagnostics,
        options: &'a Value,
    ) -> Self {
        Self {
            rule,
            severity,
            unit,
            program,
            options,
            reports: Vec::new(),
        }
    }

    /// The unit being linted.
    pub fn unit(&self) -> &'a CompilationUnit {
        self.unit
    }

    /// The compiler service.
    pub fn program(&self) -> &'a dyn SemanticDiagnostics {
        self.program
    }

    /// Deserialize the rule options, falling back to `T::default()` when
    /// none were configured.
    pub fn parse_options<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if self.options.is_null() {
            return Ok(T::default());
        }
        T::deserialize(self.options).map_err(|e| TscLintError::InvalidRuleOptions {
            rule: self.rule.id().to_string(),
            message: e.to_string(),
        })
    }

    /// Report a finding using one of the rule's message templates.
    pub fn report(&mut self, message_id: &str, data: BTreeMap<String, String>, loc: Location) {
        let message = match self.rule.message_template(message_id) {
            Some(template) => interpolate(template, &data),
            None => {
                tracing::warn!(
                    "Rule '{}' reported unknown message id '{}'",
                    self.rule.id(),
                    message_id
                );
                message_id.to_string()
            }
        };

        let diagnostic = LintDiagnostic::new(self.rule.id(), self.severity, message)
            .with_message_id(message_id)
            .with_data(data)
            .with_span(Span::new(&self.unit.file_name, loc));
        self.reports.push(diagnostic);
    }

    /// Consume the context, returning everything reported.
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.reports
    }
}

/// Substitute `{{ name }}` placeholders with values from `data`.
///
/// Whitespace inside the braces is ignored. Placeholders without a value
/// are left untouched.
pub fn interpolate(template: &str, data: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        let Some(close) = rest[open + 2..].find("}}") else {
            break;
        };
        let close = open + 2 + close;
        let key = rest[open + 2..close].trim();

        out.push_str(&rest[..open]);
        match data.get(key) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..close + 2]),
        }
        rest = &rest[close + 2..];
    }

    out.push_str(rest);
    out
}
