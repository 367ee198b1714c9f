//! Running configured rules over compilation units.

use serde_json::Value;

use super::context::RuleContext;
use super::diagnostic::LintDiagnostic;
use super::registry::RuleRegistry;
use super::rule::{RuleId, Severity};
use crate::compiler::{CompilationUnit, SemanticDiagnostics};
use crate::config::{validate, LintConfig};
use crate::error::Result;

/// A rule enabled by the configuration.
#[derive(Debug, Clone)]
struct ActiveRule {
    id: RuleId,
    severity: Severity,
    options: Value,
}

/// Runs every enabled rule of a registry with its configured severity and
/// options.
pub struct Linter {
    registry: RuleRegistry,
    active: Vec<ActiveRule>,
}

impl Linter {
    /// Resolve `config` against `registry`.
    ///
    /// Rules the config does not mention run at their default severity
    /// with their default options.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` for unknown rules or invalid options.
    pub fn new(registry: RuleRegistry, config: &LintConfig) -> Result<Self> {
        validate(config, &registry)?;

        let active = registry
            .iter()
            .filter_map(|rule| {
                let id = rule.id();
                let setting = config.rule(id.as_str());
                let severity = match setting {
                    Some(setting) => setting.severity(rule.default_severity())?,
                    None => rule.default_severity(),
                };
                let options = setting
                    .and_then(|s| s.options.clone())
                    .unwrap_or_else(|| rule.default_options());
                Some(ActiveRule {
                    id,
                    severity,
                    options,
                })
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "Enabled rules: {}",
            active
                .iter()
                .map(|r| format!("{} ({})", r.id, r.severity))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self { registry, active })
    }

    /// A linter running the built-in rules with `config`.
    pub fn with_builtins(config: &LintConfig) -> Result<Self> {
        Self::new(RuleRegistry::with_builtins(), config)
    }

    /// The rules this linter was built from.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Lint one compilation unit.
    ///
    /// Diagnostics are ordered by location, then by rule.
    pub fn lint_unit(
        &self,
        unit: &CompilationUnit,
        program: &dyn SemanticDiagnostics,
    ) -> Result<Vec<LintDiagnostic>> {
        let mut diagnostics = Vec::new();

        for active in &self.active {
            let Some(rule) = self.registry.get(&active.id) else {
                continue;
            };
            let mut ctx = RuleContext::new(rule, active.severity, unit, program, &active.options);
            rule.check(&mut ctx)?;
            diagnostics.extend(ctx.into_diagnostics());
        }

        diagnostics.sort_by(|a, b| {
            let a_loc = a.span.as_ref().map(|s| s.location);
            let b_loc = b.span.as_ref().map(|s| s.location);
            a_loc.cmp(&b_loc).then_with(|| a.rule_id.cmp(&b.rule_id))
        });

        tracing::debug!(
            "{}: {} finding(s)",
            unit.file_name,
            diagnostics.len()
        );
        Ok(diagnostics)
    }
}
