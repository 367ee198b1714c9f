//! Program snapshots.
//!
//! A snapshot is a JSON dump of the source files of a program together with
//! the semantic diagnostics the compiler returned for each of them. It lets
//! the linter run without a compiler installed.
//!
//! ```json
//! {
//!   "units": [
//!     {
//!       "fileName": "src/index.ts",
//!       "text": "const x: number = 'a';",
//!       "diagnostics": [
//!         { "file": "src/index.ts", "category": 1, "code": 2322,
//!           "messageText": "Type 'string' is not assignable to type 'number'.",
//!           "start": 6, "length": 1 }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::{CompilationUnit, Diagnostic, SemanticDiagnostics};
use crate::error::{Result, TscLintError};

/// A source file and the diagnostics reported for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotUnit {
    #[serde(flatten)]
    pub unit: CompilationUnit,
    #[serde(default, deserialize_with = "skip_malformed")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Keep the diagnostics that parse; one bad entry must not lose the rest.
fn skip_malformed<'de, D>(deserializer: D) -> std::result::Result<Vec<Diagnostic>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match Diagnostic::deserialize(entry) {
            Ok(diagnostic) => Some(diagnostic),
            Err(e) => {
                tracing::warn!("Skipping malformed diagnostic #{}: {}", index, e);
                None
            }
        })
        .collect())
}

/// Precomputed diagnostics for a whole program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramSnapshot {
    #[serde(default)]
    pub units: Vec<SnapshotUnit>,
}

impl ProgramSnapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TscLintError::SnapshotError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let snapshot =
            Self::from_json_str(&content).map_err(|e| TscLintError::SnapshotError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Loaded snapshot {} with {} unit(s)",
            path.display(),
            snapshot.units.len()
        );
        Ok(snapshot)
    }

    /// Iterate over the compilation units in the snapshot.
    pub fn compilation_units(&self) -> impl Iterator<Item = &CompilationUnit> {
        self.units.iter().map(|u| &u.unit)
    }

    /// Find a unit by file name.
    pub fn unit(&self, file_name: &str) -> Option<&CompilationUnit> {
        self.compilation_units().find(|u| u.file_name == file_name)
    }
}

impl SemanticDiagnostics for ProgramSnapshot {
    fn semantic_diagnostics(&self, unit: &CompilationUnit) -> Vec<Diagnostic> {
        self.units
            .iter()
            .find(|u| u.unit.file_name == unit.file_name)
            .map(|u| u.diagnostics.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNAPSHOT: &str = r#"{
        "units": [
            {
                "fileName": "src/index.ts",
                "text": "const x: number = 'a';",
                "diagnostics": [
                    { "file": "src/index.ts", "category": 1, "code": 2322,
                      "messageText": "Type 'string' is not assignable to type 'number'.",
                      "start": 6, "length": 1 }
                ]
            },
            { "fileName": "src/clean.ts", "text": "export {};" }
        ]
    }"#;

    #[test]
    fn parses_units_and_diagnostics() {
        let snapshot = ProgramSnapshot::from_json_str(SNAPSHOT).unwrap();

        assert_eq!(snapshot.units.len(), 2);
        let unit = snapshot.unit("src/index.ts").unwrap();
        assert_eq!(unit.text, "const x: number = 'a';");
        assert_eq!(snapshot.semantic_diagnostics(unit).len(), 1);
    }

    #[test]
    fn units_without_diagnostics_default_to_empty() {
        let snapshot = ProgramSnapshot::from_json_str(SNAPSHOT).unwrap();
        let unit = snapshot.unit("src/clean.ts").unwrap();
        assert!(snapshot.semantic_diagnostics(unit).is_empty());
    }

    #[test]
    fn unknown_unit_has_no_diagnostics() {
        let snapshot = ProgramSnapshot::from_json_str(SNAPSHOT).unwrap();
        let stranger = CompilationUnit::new("src/other.ts", "");
        assert!(snapshot.semantic_diagnostics(&stranger).is_empty());
    }

    #[test]
    fn malformed_diagnostics_are_skipped() {
        let json = r#"{ "units": [ {
            "fileName": "src/index.ts",
            "text": "const x: number = 'a';",
            "diagnostics": [
                { "file": "src/index.ts", "category": 1,
                  "messageText": "No code here.", "start": 0, "length": 1 },
                { "file": "src/index.ts", "category": "fatal", "code": 1,
                  "messageText": "Unknown category.", "start": 0, "length": 1 },
                { "file": "src/index.ts", "category": 1, "code": 2322,
                  "messageText": "Type 'string' is not assignable to type 'number'.",
                  "start": 6, "length": 1 },
                "not a diagnostic"
            ]
        } ] }"#;

        let snapshot = ProgramSnapshot::from_json_str(json).unwrap();
        let unit = snapshot.unit("src/index.ts").unwrap();
        let diagnostics = snapshot.semantic_diagnostics(unit);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, 2322);
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let snapshot = ProgramSnapshot::load(file.path()).unwrap();

        assert_eq!(snapshot.units.len(), 2);
    }

    #[test]
    fn load_reports_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = ProgramSnapshot::load(file.path());

        assert!(matches!(result, Err(TscLintError::SnapshotError { .. })));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = ProgramSnapshot::load(Path::new("/nonexistent/snapshot.json"));
        assert!(matches!(result, Err(TscLintError::SnapshotError { .. })));
    }
}
