//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Resolve build metadata and run `docker build` with it (default)
    Build,
    /// Print the resolved build metadata without building
    Metadata,
    /// Print the `docker build` command that would run, without running it
    Plan,
}

impl Commands {
    /// Only `build` announces itself; the others print machine-readable output
    pub(crate) fn announces_start(self) -> bool {
        matches!(self, Commands::Build)
    }
}

/// Resolve the optional subcommand, defaulting to `build`
pub(crate) fn parse_command(cmd: Option<Commands>) -> Commands {
    cmd.unwrap_or(Commands::Build)
}
