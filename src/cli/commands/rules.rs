//! Rules command implementation.
//!
//! The `tsc-lint rules` command lists the built-in rules.

use crate::error::Result;
use crate::lint::RuleRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    registry: RuleRegistry,
}

impl RulesCommand {
    /// Create a rules command listing the built-in rules.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_builtins(),
        }
    }
}

impl Default for RulesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        for rule in self.registry.iter() {
            ui.message(&format!(
                "{:<8} {:<8} {:<10} {}",
                rule.id(),
                rule.default_severity(),
                rule.rule_type(),
                rule.description()
            ));
        }
        Ok(CommandResult::success())
    }
}
