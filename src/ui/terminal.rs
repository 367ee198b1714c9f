//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, LintTheme, OutputMode, UserInterface};

/// Terminal UI writing output to stdout and problems to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: LintTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            LintTheme::new()
        } else {
            LintTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the terminal UI for `mode`.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
