//! Compiler diagnostics as lint findings.
//!
//! This module turns the semantic diagnostics a compiler service computed
//! for a file into lint reports, through a small rule-based host.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Position translation** - Offsets to line/column ([`LineIndex`], [`locate`])
//! - **Bridge** - Filtering and formatting compiler diagnostics ([`DiagnosticBridge`])
//! - **Rules** - Individual checks ([`LintRule`] trait, [`TypeScriptErrorsRule`])
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Linter** - Runs configured rules over a unit ([`Linter`])
//! - **Diagnostics** - Reports with severity and location ([`LintDiagnostic`])
//!
//! # Example
//!
//! ```
//! use tsc_lint::compiler::{CompilationUnit, Diagnostic};
//! use tsc_lint::lint::{bridge, FilterConfig, Position};
//!
//! let unit = CompilationUnit::new("index.ts", "const x: number = 'a';");
//! let diagnostics = vec![Diagnostic::error(
//!     "index.ts",
//!     2322,
//!     "Type 'string' is not assignable to type 'number'.",
//! )
//! .at(6, 1)];
//!
//! let findings: Vec<_> = bridge(&unit, &diagnostics, &FilterConfig::new()).collect();
//!
//! assert_eq!(
//!     findings[0].message,
//!     "Type 'string' is not assignable to type 'number'. ts(2322)"
//! );
//! assert_eq!(findings[0].location.start, Position::new(1, 6));
//! ```

pub mod bridge;
pub mod context;
pub mod diagnostic;
pub mod linter;
pub mod options;
pub mod output;
pub mod position;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod schema;
pub mod span;

pub use bridge::{bridge, format_message, DiagnosticBridge, Finding, Findings, Rejection};
pub use context::RuleContext;
pub use diagnostic::LintDiagnostic;
pub use linter::Linter;
pub use options::FilterConfig;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter};
pub use position::{locate, LineIndex};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, RuleType, Severity};
pub use rules::TypeScriptErrorsRule;
pub use schema::SchemaGenerator;
pub use span::{Location, Position, Span};
