//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status messages and echoed commands, plus the resolved tool paths and
    /// working directory of every command.
    Verbose,
    /// Status messages and echoed commands.
    #[default]
    Normal,
    /// Status messages only.
    Quiet,
}

impl OutputMode {
    /// Build the mode from the global `--verbose` / `--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode echoes commands before running them.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode reports resolved tools and working directories.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
