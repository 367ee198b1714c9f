//! JSON output formatter.
//!
//! Formats lint diagnostics as machine-readable JSON for tooling integration.
//! Each entry carries the report shape lint hosts consume
//! (`messageId`, `data`, `loc`) alongside the rendered message.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Location, Severity};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    diagnostics: Vec<JsonDiagnostic<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDiagnostic<'a> {
    rule_id: &'a str,
    severity: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_id: Option<&'a str>,
    message: &'a str,
    #[serde(skip_serializing_if = "no_data")]
    data: &'a BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loc: Option<Location>,
}

fn no_data(data: &&BTreeMap<String, String>) -> bool {
    data.is_empty()
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
    hints: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn severity_to_string(severity: Severity) -> &'static str {
        match severity {
            Severity::Hint => "hint",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let json_diagnostics: Vec<_> = diagnostics
            .iter()
            .map(|d| JsonDiagnostic {
                rule_id: d.rule_id.as_str(),
                severity: Self::severity_to_string(d.severity),
                message_id: d.message_id.as_deref(),
                message: &d.message,
                data: &d.data,
                file: d.span.as_ref().map(|s| s.file.display().to_string()),
                loc: d.span.as_ref().map(|s| s.location),
            })
            .collect();

        let count = |severity: Severity| {
            diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .count()
        };
        let summary = JsonSummary {
            total: diagnostics.len(),
            errors: count(Severity::Error),
            warnings: count(Severity::Warning),
            hints: count(Severity::Hint),
        };

        let output = JsonOutput {
            diagnostics: json_diagnostics,
            summary,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Position, RuleId, Span};

    fn render(diagnostics: &[LintDiagnostic]) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(diagnostics, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let parsed = render(&[LintDiagnostic::new(
            RuleId::new("all"),
            Severity::Error,
            "Error message",
        )]);

        assert!(parsed["diagnostics"].is_array());
        assert_eq!(parsed["summary"]["total"].as_u64().unwrap(), 1);
    }

    #[test]
    fn includes_report_shape() {
        let mut data = BTreeMap::new();
        data.insert("errorMessage".to_string(), "msg ts(2322)".to_string());
        let diag = LintDiagnostic::new(RuleId::new("all"), Severity::Error, "msg ts(2322)")
            .with_message_id("typescriptError")
            .with_data(data)
            .with_span(Span::new(
                "src/index.ts",
                Location::new(Position::new(1, 6), Position::new(2, 0)),
            ));

        let parsed = render(&[diag]);
        let entry = &parsed["diagnostics"][0];

        assert_eq!(entry["ruleId"], "all");
        assert_eq!(entry["messageId"], "typescriptError");
        assert_eq!(entry["data"]["errorMessage"], "msg ts(2322)");
        assert_eq!(entry["file"], "src/index.ts");
        assert_eq!(entry["loc"]["start"]["line"], 1);
        assert_eq!(entry["loc"]["start"]["column"], 6);
        assert_eq!(entry["loc"]["end"]["line"], 2);
        assert_eq!(entry["loc"]["end"]["column"], 0);
    }

    #[test]
    fn omits_location_when_absent() {
        let parsed = render(&[LintDiagnostic::new(
            RuleId::new("all"),
            Severity::Error,
            "msg",
        )]);

        assert!(parsed["diagnostics"][0]["loc"].is_null());
        assert!(parsed["diagnostics"][0]["data"].is_null());
    }

    #[test]
    fn summary_counts_by_severity() {
        let parsed = render(&[
            LintDiagnostic::new(RuleId::new("r1"), Severity::Error, "e1"),
            LintDiagnostic::new(RuleId::new("r2"), Severity::Error, "e2"),
            LintDiagnostic::new(RuleId::new("r3"), Severity::Warning, "w1"),
            LintDiagnostic::new(RuleId::new("r4"), Severity::Hint, "h1"),
        ]);

        assert_eq!(parsed["summary"]["total"], 4);
        assert_eq!(parsed["summary"]["errors"], 2);
        assert_eq!(parsed["summary"]["warnings"], 1);
        assert_eq!(parsed["summary"]["hints"], 1);
    }

    #[test]
    fn empty_output() {
        let parsed = render(&[]);
        assert_eq!(parsed["summary"]["total"], 0);
    }
}
