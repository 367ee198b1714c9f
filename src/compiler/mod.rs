//! The compiler service boundary.
//!
//! The linter never type-checks anything itself. It consumes diagnostics
//! that a compiler service has already computed, through the narrow
//! [`SemanticDiagnostics`] capability. [`ProgramSnapshot`] is the concrete
//! service used by the CLI; tests usually pass a closure instead.

pub mod diagnostic;
pub mod snapshot;

pub use diagnostic::{Diagnostic, DiagnosticCategory, MessageChain, MessageText};
pub use snapshot::{ProgramSnapshot, SnapshotUnit};

use serde::{Deserialize, Serialize};

/// One source file handed to the linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationUnit {
    /// File name as the compiler service knows it.
    pub file_name: String,
    /// Full source text the diagnostic offsets were computed against.
    pub text: String,
}

impl CompilationUnit {
    /// Create a new compilation unit.
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            text: text.into(),
        }
    }
}

/// Read-only query for the semantic diagnostics of a compilation unit.
///
/// The returned diagnostics may belong to other files (e.g. declaration
/// files pulled in by the unit); callers filter them.
pub trait SemanticDiagnostics {
    /// Semantic diagnostics the compiler attributes to `unit`.
    fn semantic_diagnostics(&self, unit: &CompilationUnit) -> Vec<Diagnostic>;
}

impl<F> SemanticDiagnostics for F
where
    F: Fn(&CompilationUnit) -> Vec<Diagnostic>,
{
    fn semantic_diagnostics(&self, unit: &CompilationUnit) -> Vec<Diagnostic> {
        self(unit)
    }
}
