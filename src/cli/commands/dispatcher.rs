//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_override: None,
        }
    }

    /// Load configuration from `path` instead of the project config.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Lint(args) => {
                let cmd = super::lint::LintCommand::new(&self.project_root, args.clone())
                    .with_config_override(self.config_override.clone());
                cmd.execute(ui)
            }
            Commands::Rules => super::rules::RulesCommand::new().execute(ui),
            Commands::Schema => super::schema::SchemaCommand::new().execute(ui),
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatches_rules_command() {
        let cli = Cli::try_parse_from(["tsc-lint", "rules"]).unwrap();
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new(PathBuf::from("."))
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("all"));
    }
}
