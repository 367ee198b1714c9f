//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.
//! Locations are printed as `file:line:column` with a 1-based column, the
//! form terminals and editors turn into links.

use console::Style;

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> String {
        let (label, style) = match severity {
            Severity::Hint => ("hint", Style::new().cyan()),
            Severity::Warning => ("warning", Style::new().yellow()),
            Severity::Error => ("error", Style::new().red().bold()),
        };
        if self.use_color {
            style.force_styling(true).apply_to(label).to_string()
        } else {
            label.to_string()
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            // Header line: error[rule-id]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                self.severity_prefix(diag.severity),
                diag.rule_id,
                diag.message
            )?;

            if let Some(ref span) = diag.span {
                writeln!(
                    writer,
                    "  --> {}:{}:{}",
                    span.file.display(),
                    span.start_line(),
                    span.start_column() + 1
                )?;
            }

            writeln!(writer)?;
        }

        // Summary
        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Location, Position, RuleId, Span};

    fn render(formatter: &HumanFormatter, diagnostics: &[LintDiagnostic]) -> String {
        let mut output = Vec::new();
        formatter.format(diagnostics, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn formats_error_diagnostic() {
        let diagnostics = vec![LintDiagnostic::new(
            RuleId::new("all"),
            Severity::Error,
            "Type 'string' is not assignable to type 'number'. ts(2322)",
        )
        .with_span(Span::new(
            "src/index.ts",
            Location::new(Position::new(1, 6), Position::new(1, 7)),
        ))];

        let output = render(&HumanFormatter::new(false), &diagnostics);

        insta::assert_snapshot!(output, @r"
        error[all]: Type 'string' is not assignable to type 'number'. ts(2322)
          --> src/index.ts:1:7

        Found 1 error(s) and 0 warning(s)
        ");
    }

    #[test]
    fn formats_warning_diagnostic() {
        let diagnostics = vec![LintDiagnostic::new(
            RuleId::new("all"),
            Severity::Warning,
            "Test warning message",
        )];

        let output = render(&HumanFormatter::new(false), &diagnostics);

        assert!(output.contains("warning[all]"));
        assert!(!output.contains("-->"));
    }

    #[test]
    fn formats_hint_diagnostic() {
        let diagnostics = vec![LintDiagnostic::new(
            RuleId::new("test-rule"),
            Severity::Hint,
            "Test hint message",
        )];

        let output = render(&HumanFormatter::new(false), &diagnostics);

        assert!(output.contains("hint[test-rule]"));
    }

    #[test]
    fn formats_summary_line() {
        let diagnostics = vec![
            LintDiagnostic::new(RuleId::new("r1"), Severity::Error, "err"),
            LintDiagnostic::new(RuleId::new("r2"), Severity::Warning, "warn"),
            LintDiagnostic::new(RuleId::new("r3"), Severity::Warning, "warn2"),
        ];

        let output = render(&HumanFormatter::new(false), &diagnostics);

        assert!(output.contains("1 error(s)"));
        assert!(output.contains("2 warning(s)"));
    }

    #[test]
    fn colors_severity_when_enabled() {
        let diagnostics = vec![LintDiagnostic::new(
            RuleId::new("all"),
            Severity::Error,
            "boom",
        )];

        let output = render(&HumanFormatter::new(true), &diagnostics);

        assert!(output.contains("\u{1b}["));
        assert!(output.contains("[all]: boom"));
    }

    #[test]
    fn no_summary_when_no_issues() {
        let output = render(&HumanFormatter::new(false), &[]);
        assert!(!output.contains("Found"));
    }
}
