//! tsc-lint - TypeScript semantic errors as lint findings.
//!
//! tsc-lint takes the semantic diagnostics a TypeScript compiler service
//! computed for a file and reports them through a lint host, filtered by
//! error code and positioned by line and column.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compiler`] - Compiler-side data: units, diagnostics, program snapshots
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Diagnostic bridge, rules, and output formatters
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use tsc_lint::compiler::{CompilationUnit, Diagnostic};
//! use tsc_lint::config::LintConfig;
//! use tsc_lint::lint::{Linter, Severity};
//!
//! let unit = CompilationUnit::new("index.ts", "let n: number = 'x';");
//! let program = |unit: &CompilationUnit| {
//!     vec![Diagnostic::error(unit.file_name.as_str(), 2322, "Type 'string' is not assignable to type 'number'.").at(4, 1)]
//! };
//!
//! let linter = Linter::with_builtins(&LintConfig::default()).unwrap();
//! let diagnostics = linter.lint_unit(&unit, &program).unwrap();
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].severity, Severity::Warning);
//! assert!(diagnostics[0].message.ends_with("ts(2322)"));
//! ```

pub mod cli;
pub mod compiler;
pub mod config;
pub mod error;
pub mod lint;
pub mod ui;

pub use error::{Result, TscLintError};
