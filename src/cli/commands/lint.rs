//! Lint command implementation.
//!
//! The `tsc-lint lint` command reports the semantic errors recorded in a
//! program snapshot through the configured lint rules.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::cli::args::LintArgs;
use crate::compiler::{CompilationUnit, ProgramSnapshot};
use crate::config::{load_config, LintConfig};
use crate::error::{Result, TscLintError};
use crate::lint::rules::typescript_errors::RULE_ID;
use crate::lint::{
    FilterConfig, HumanFormatter, JsonFormatter, LintDiagnostic, LintFormatter, Linter,
    OutputFormat, RuleRegistry, SarifFormatter, Severity,
};
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Exit code when linting could not run at all.
const EXIT_UNUSABLE: i32 = 2;

/// The lint command implementation.
pub struct LintCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(project_root: &Path, args: LintArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: None,
            args,
        }
    }

    /// Load configuration from `path` instead of the project config.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Error-code lists given on the command line.
    fn cli_filter(&self) -> FilterConfig {
        let to_set = |codes: &Option<Vec<u32>>| {
            codes
                .as_ref()
                .map(|codes| codes.iter().copied().collect::<BTreeSet<_>>())
        };
        FilterConfig {
            include_error_codes: to_set(&self.args.include_error_codes),
            exclude_error_codes: to_set(&self.args.exclude_error_codes),
        }
    }

    /// Merge command-line code lists into the options of the errors rule.
    fn apply_overrides(&self, config: &mut LintConfig) -> Result<()> {
        let overrides = self.cli_filter();
        if overrides == FilterConfig::default() {
            return Ok(());
        }

        let configured = match config.rule(RULE_ID).and_then(|s| s.options.clone()) {
            Some(options) if !options.is_null() => serde_json::from_value::<FilterConfig>(options)
                .map_err(|e| TscLintError::InvalidRuleOptions {
                    rule: RULE_ID.to_string(),
                    message: e.to_string(),
                })?,
            _ => FilterConfig::default(),
        };

        let merged = configured.overridden_by(&overrides);
        tracing::debug!("Command-line filter for '{}': {:?}", RULE_ID, merged);
        let options = serde_json::to_value(merged).map_err(anyhow::Error::from)?;
        config.set_rule_options(RULE_ID, options);
        Ok(())
    }

    /// Units selected with `--file`, or every unit of the snapshot.
    fn select_units<'s>(
        &self,
        snapshot: &'s ProgramSnapshot,
        ui: &mut dyn UserInterface,
    ) -> Vec<&'s CompilationUnit> {
        if self.args.files.is_empty() {
            return snapshot.compilation_units().collect();
        }

        self.args
            .files
            .iter()
            .filter_map(|name| {
                let unit = snapshot.unit(name);
                if unit.is_none() {
                    ui.warning(&format!("No file named '{}' in snapshot", name));
                }
                unit
            })
            .collect()
    }

    /// Format diagnostics using the appropriate formatter.
    fn format_output(&self, registry: &RuleRegistry, diagnostics: &[LintDiagnostic]) -> String {
        let mut output = Vec::new();

        let written = match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(diagnostics, &mut output),
            OutputFormat::Sarif => {
                SarifFormatter::new("tsc-lint", env!("CARGO_PKG_VERSION"))
                    .with_rule_descriptions(registry)
                    .format(diagnostics, &mut output)
            }
            OutputFormat::Human => {
                HumanFormatter::new(should_use_colors()).format(diagnostics, &mut output)
            }
        };
        if let Err(e) = written {
            tracing::warn!("Failed to format lint output: {}", e);
        }

        String::from_utf8_lossy(&output).into_owned()
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = match load_config(&self.project_root, self.config_override.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_UNUSABLE));
            }
        };

        let linter = match self
            .apply_overrides(&mut config)
            .and_then(|()| Linter::with_builtins(&config))
        {
            Ok(linter) => linter,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_UNUSABLE));
            }
        };

        let snapshot = match ProgramSnapshot::load(&self.args.snapshot) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_UNUSABLE));
            }
        };

        let mut diagnostics = Vec::new();
        for unit in self.select_units(&snapshot, ui) {
            diagnostics.extend(linter.lint_unit(unit, &snapshot)?);
        }

        let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
        let has_warnings = diagnostics.iter().any(|d| d.severity == Severity::Warning);
        let should_fail = has_errors || (self.args.strict && has_warnings);

        if diagnostics.is_empty() && self.args.format == OutputFormat::Human {
            ui.success("No problems found");
            return Ok(CommandResult::success());
        }

        let output = self.format_output(linter.registry(), &diagnostics);
        ui.message(output.trim_end());

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
