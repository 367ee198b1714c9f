//! Visual theme and styling.

use console::Style;

/// Terminal theme for status messages.
#[derive(Debug, Clone)]
pub struct LintTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for LintTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LintTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::colors_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_with_icons() {
        let theme = LintTheme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
        assert_eq!(theme.format_warning("careful"), "⚠ careful");
        assert_eq!(theme.format_error("failed"), "✗ failed");
    }

    #[test]
    fn default_theme_creates_without_panic() {
        let theme = LintTheme::default();
        assert!(theme.format_error("x").contains('x'));
    }
}
