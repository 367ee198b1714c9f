//! TypeScript semantic errors as lint findings.
//!
//! This rule asks the compiler service for the semantic diagnostics of the
//! unit being linted and reports every error that survives the
//! [`DiagnosticBridge`] filters.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, TscLintError};
use crate::lint::bridge::DiagnosticBridge;
use crate::lint::{FilterConfig, LintRule, RuleContext, RuleId, RuleType, Severity};

/// ID of the rule, as written in the config file.
pub const RULE_ID: &str = "all";

/// Message id of every report this rule makes.
pub const MESSAGE_ID: &str = "typescriptError";

/// Reports the compiler's semantic errors for the current file.
pub struct TypeScriptErrorsRule;

impl LintRule for TypeScriptErrorsRule {
    fn id(&self) -> RuleId {
        RuleId::new(RULE_ID)
    }

    fn name(&self) -> &str {
        "TypeScript Errors"
    }

    fn description(&self) -> &str {
        "Turning tsc semantic errors into lint errors"
    }

    fn rule_type(&self) -> RuleType {
        RuleType::Problem
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[(MESSAGE_ID, "{{ errorMessage }}")]
    }

    fn options_schema(&self) -> Value {
        Value::Array(vec![schemars::schema_for!(FilterConfig).to_value()])
    }

    fn default_options(&self) -> Value {
        Value::Object(Default::default())
    }

    fn validate_options(&self, options: &Value) -> Result<()> {
        if options.is_null() {
            return Ok(());
        }
        FilterConfig::deserialize(options)
            .map(|_| ())
            .map_err(|e| TscLintError::InvalidRuleOptions {
                rule: self.id().to_string(),
                message: e.to_string(),
            })
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<()> {
        let config: FilterConfig = ctx.parse_options()?;
        let unit = ctx.unit();
        let diagnostics = ctx.program().semantic_diagnostics(unit);

        tracing::debug!(
            "{}: {} semantic diagnostic(s) from compiler",
            unit.file_name,
            diagnostics.len()
        );

        let bridge = DiagnosticBridge::new(unit, &config);
        for finding in bridge.findings(&diagnostics) {
            let mut data = BTreeMap::new();
            data.insert("errorMessage".to_string(), finding.message);
            ctx.report(MESSAGE_ID, data, finding.location);
        }

        Ok(())
    }
}
