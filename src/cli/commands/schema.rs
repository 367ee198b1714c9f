//! Schema command implementation.
//!
//! The `tsc-lint schema` command prints the JSON schema of `.tsc-lint.yml`.

use crate::error::{Result, TscLintError};
use crate::lint::{RuleRegistry, SchemaGenerator};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand {
    registry: RuleRegistry,
}

impl SchemaCommand {
    /// Create a schema command for the built-in rules.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_builtins(),
        }
    }
}

impl Default for SchemaCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new(&self.registry).generate();
        let rendered = serde_json::to_string_pretty(&schema)
            .map_err(|e| TscLintError::Other(anyhow::anyhow!("Failed to render schema: {}", e)))?;
        ui.message(&rendered);
        Ok(CommandResult::success())
    }
}
