//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use tsc_lint::ui::{create_ui, OutputMode, UserInterface};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.success("No problems found"); // hidden in quiet mode
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, LintTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display command output (findings, formatted reports).
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
