//! Compiler diagnostic bridging.
//!
//! Turns the semantic diagnostics of one compilation unit into findings:
//! filters them, extracts a message and translates the offset range into a
//! line/column [`Location`].
//!
//! Each diagnostic goes through these checks, in order; the first failure
//! drops it:
//!
//! 1. it belongs to the unit being linted
//! 2. it is not an unused/unreachable code hint
//! 3. its category is `Error`
//! 4. its code is on the include list, if there is one
//! 5. its code is not on the exclude list
//! 6. it carries a start offset and a length
//!
//! Dropped diagnostics are logged at trace level and never turn into errors.

use std::fmt;

use super::options::FilterConfig;
use super::position::LineIndex;
use super::span::Location;
use crate::compiler::{CompilationUnit, Diagnostic, DiagnosticCategory};

/// A diagnostic ready to be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// `"<head message> ts(<code>)"`.
    pub message: String,
    pub location: Location,
}

/// Why a diagnostic was not turned into a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Attributed to another file, or to no file at all.
    ForeignFile,
    /// Flags unnecessary code rather than an error.
    Unnecessary,
    /// Category other than `Error`.
    NotAnError,
    /// Code missing from the include list.
    NotIncluded,
    /// Code on the exclude list.
    Excluded,
    /// No start offset or length.
    MissingRange,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::ForeignFile => "belongs to another file",
            Rejection::Unnecessary => "reports unnecessary code",
            Rejection::NotAnError => "is not an error",
            Rejection::NotIncluded => "code is not included",
            Rejection::Excluded => "code is excluded",
            Rejection::MissingRange => "has no source range",
        };
        f.write_str(reason)
    }
}

/// Format the reported message: the head of the message chain followed by
/// the error code.
pub fn format_message(diagnostic: &Diagnostic) -> String {
    format!("{} ts({})", diagnostic.message_text.head(), diagnostic.code)
}

/// Filters and converts the diagnostics of one compilation unit.
#[derive(Debug, Clone)]
pub struct DiagnosticBridge<'a> {
    unit: &'a CompilationUnit,
    config: &'a FilterConfig,
    lines: LineIndex,
}

impl<'a> DiagnosticBridge<'a> {
    /// Prepare a bridge for `unit`. Scans the unit text once.
    pub fn new(unit: &'a CompilationUnit, config: &'a FilterConfig) -> Self {
        Self {
            unit,
            config,
            lines: LineIndex::new(&unit.text),
        }
    }

    /// Run the filter checks, returning the `[start, end)` range of a
    /// diagnostic that passes them.
    pub fn check(&self, diagnostic: &Diagnostic) -> Result<(usize, usize), Rejection> {
        if diagnostic.file.as_deref() != Some(self.unit.file_name.as_str()) {
            return Err(Rejection::ForeignFile);
        }
        if diagnostic.is_unnecessary() {
            return Err(Rejection::Unnecessary);
        }
        if diagnostic.category != DiagnosticCategory::Error {
            return Err(Rejection::NotAnError);
        }
        if !self.config.is_included(diagnostic.code) {
            return Err(Rejection::NotIncluded);
        }
        if self.config.is_excluded(diagnostic.code) {
            return Err(Rejection::Excluded);
        }
        diagnostic.range().ok_or(Rejection::MissingRange)
    }

    /// Convert a single diagnostic, or `None` if it is filtered out.
    pub fn finding(&self, diagnostic: &Diagnostic) -> Option<Finding> {
        match self.check(diagnostic) {
            Ok((start, end)) => Some(Finding {
                message: format_message(diagnostic),
                location: self.lines.locate(start, end),
            }),
            Err(rejection) => {
                tracing::trace!(
                    "Dropping ts({}) for {}: {}",
                    diagnostic.code,
                    self.unit.file_name,
                    rejection
                );
                None
            }
        }
    }

    /// Lazily convert `diagnostics`, in order.
    ///
    /// The returned iterator can be cloned to walk the same findings again.
    pub fn findings<'b>(&'b self, diagnostics: &'b [Diagnostic]) -> Findings<'b> {
        Findings {
            bridge: self,
            diagnostics: diagnostics.iter(),
        }
    }
}

/// Iterator over the findings of a [`DiagnosticBridge`].
#[derive(Debug, Clone)]
pub struct Findings<'b> {
    bridge: &'b DiagnosticBridge<'b>,
    diagnostics: std::slice::Iter<'b, Diagnostic>,
}

impl Iterator for Findings<'_> {
    type Item = Finding;

    fn next(&mut self) -> Option<Finding> {
        let bridge = self.bridge;
        self.diagnostics.find_map(|d| bridge.finding(d))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.diagnostics.size_hint().1)
    }
}

/// Convert the diagnostics of `unit` into findings.
pub fn bridge<'a>(
    unit: &'a CompilationUnit,
    diagnostics: &'a [Diagnostic],
    config: &'a FilterConfig,
) -> impl Iterator<Item = Finding> + Clone + 'a {
    let bridge = DiagnosticBridge::new(unit, config);
    diagnostics.iter().filter_map(move |d| bridge.finding(d))
}
