//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub code scanning and editors.
//! SARIF regions use 1-based columns, so columns are shifted on the way out.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, RuleRegistry, Severity};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

/// SARIF version we generate.
const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Formats lint output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
    /// Rule descriptions keyed by rule ID.
    pub rule_descriptions: BTreeMap<String, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    short_description: SarifMessage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<SarifRegion>,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: usize,
    start_column: usize,
    end_line: usize,
    end_column: usize,
}

impl SarifFormatter {
    /// Create a new SARIF formatter.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            rule_descriptions: BTreeMap::new(),
        }
    }

    /// Describe reported rules using the descriptions in `registry`.
    pub fn with_rule_descriptions(mut self, registry: &RuleRegistry) -> Self {
        self.rule_descriptions = registry
            .iter()
            .map(|rule| (rule.id().to_string(), rule.description().to_string()))
            .collect();
        self
    }

    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Hint => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl LintFormatter for SarifFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let rule_ids: BTreeSet<_> = diagnostics.iter().map(|d| &d.rule_id).collect();

        let rules: Vec<_> = rule_ids
            .iter()
            .map(|id| SarifRule {
                id: id.0.clone(),
                short_description: SarifMessage {
                    text: self
                        .rule_descriptions
                        .get(id.as_str())
                        .cloned()
                        .unwrap_or_else(|| format!("Rule {}", id)),
                },
            })
            .collect();

        let results: Vec<_> = diagnostics
            .iter()
            .map(|d| {
                let locations = d
                    .span
                    .as_ref()
                    .map(|span| {
                        vec![SarifLocation {
                            physical_location: SarifPhysicalLocation {
                                artifact_location: SarifArtifactLocation {
                                    uri: span.file.display().to_string(),
                                },
                                region: Some(SarifRegion {
                                    start_line: span.location.start.line,
                                    start_column: span.location.start.column + 1,
                                    end_line: span.location.end.line,
                                    end_column: span.location.end.column + 1,
                                }),
                            },
                        }]
                    })
                    .unwrap_or_default();

                SarifResult {
                    rule_id: d.rule_id.0.clone(),
                    level: Self::severity_to_level(d.severity),
                    message: SarifMessage {
                        text: d.message.clone(),
                    },
                    locations,
                }
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules,
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(writer, &log).map_err(std::io::Error::other)?;

        Ok(())
    }
}
