//! Shell completions generation.
//!
//! The `tsc-lint completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    fn generate<W: std::io::Write>(&self, out: &mut W) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "tsc-lint", out);
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        self.generate(&mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn render(shell: Shell) -> String {
        let mut buf = Vec::new();
        CompletionsCommand::new(CompletionsArgs { shell }).generate(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn generates_bash_completions() {
        let output = render(Shell::Bash);
        assert!(output.contains("tsc-lint"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        assert!(render(Shell::Zsh).contains("tsc-lint"));
    }

    #[test]
    fn generates_fish_completions() {
        let output = render(Shell::Fish);
        assert!(output.contains("tsc-lint"));
        assert!(output.contains("include-error-codes"));
    }
}
