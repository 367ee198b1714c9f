//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// tsc-lint - TypeScript semantic errors as lint findings.
#[derive(Debug, Parser)]
#[command(name = "tsc-lint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .tsc-lint.yml)
    #[arg(short, long, global = true, env = "TSC_LINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report the semantic errors of a program snapshot as lint findings
    Lint(LintArgs),

    /// List available rules
    Rules,

    /// Print the JSON schema of the configuration file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LintArgs {
    /// Program snapshot (JSON) holding source files and their diagnostics
    pub snapshot: PathBuf,

    /// Lint only these files (repeatable; default: every file)
    #[arg(long = "file", value_name = "FILE")]
    pub files: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Report only these error codes (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "CODES")]
    pub include_error_codes: Option<Vec<u32>>,

    /// Never report these error codes (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "CODES")]
    pub exclude_error_codes: Option<Vec<u32>>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_lint_with_code_lists() {
        let cli = Cli::try_parse_from([
            "tsc-lint",
            "lint",
            "program.json",
            "--include-error-codes",
            "2322,2345",
            "--exclude-error-codes=2345",
            "--file",
            "src/a.ts",
            "--file",
            "src/b.ts",
        ])
        .unwrap();

        let Commands::Lint(args) = cli.command else {
            panic!("expected lint command");
        };
        assert_eq!(args.snapshot, PathBuf::from("program.json"));
        assert_eq!(args.include_error_codes, Some(vec![2322, 2345]));
        assert_eq!(args.exclude_error_codes, Some(vec![2345]));
        assert_eq!(args.files, vec!["src/a.ts", "src/b.ts"]);
        assert_eq!(args.format, OutputFormat::Human);
        assert!(!args.strict);
    }

    #[test]
    fn parses_format_and_global_flags() {
        let cli = Cli::try_parse_from([
            "tsc-lint",
            "lint",
            "p.json",
            "--format",
            "sarif",
            "--strict",
            "--quiet",
            "--no-color",
        ])
        .unwrap();

        assert!(cli.quiet);
        assert!(cli.no_color);
        let Commands::Lint(args) = cli.command else {
            panic!("expected lint command");
        };
        assert_eq!(args.format, OutputFormat::Sarif);
        assert!(args.strict);
    }

    #[test]
    fn rejects_non_numeric_codes() {
        assert!(
            Cli::try_parse_from(["tsc-lint", "lint", "p.json", "--include-error-codes", "ts2322"])
                .is_err()
        );
    }

    #[test]
    fn requires_subcommand() {
        assert!(Cli::try_parse_from(["tsc-lint"]).is_err());
    }
}
