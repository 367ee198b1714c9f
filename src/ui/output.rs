//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show findings and status messages.
    #[default]
    Normal,
    /// Show findings only.
    Quiet,
}

impl OutputMode {
    /// Select the mode for the `--quiet` flag.
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
