//! Command-line interface for swiftlint-annotate

use clap::Parser;
use std::path::PathBuf;

/// Verbosity level for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Default)]
pub enum Verbosity {
    /// Quiet mode - only show errors
    Quiet,

    /// Normal mode - show progress
    #[default]
    Normal,

    /// Verbose mode - show commands and cache decisions
    Verbose,

    /// Debug mode - show everything
    Debug,
}

impl From<u8> for Verbosity {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }
}

impl Verbosity {
    /// Log level filter for this verbosity
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Error,
            Self::Normal => log::LevelFilter::Info,
            Self::Verbose => log::LevelFilter::Debug,
            Self::Debug => log::LevelFilter::Trace,
        }
    }
}

/// Run SwiftLint and annotate its findings inline on GitHub
///
/// Every option can also come from the step inputs (`INPUT_VERSION`,
/// `INPUT_STRICT`, `INPUT_ARGS`) or from `.swiftlint-annotate.toml`.
#[derive(Parser, Debug)]
#[command(author, about)]
pub struct Cli {
    /// SwiftLint release to run, or "latest"
    #[arg(long = "swiftlint-version", value_name = "VERSION")]
    pub swiftlint_version: Option<String>,

    /// Pass --strict to SwiftLint
    #[arg(short, long)]
    pub strict: bool,

    /// Extra arguments for SwiftLint, split with shell quoting rules
    #[arg(long, value_name = "ARGS", allow_hyphen_values = true)]
    pub args: Option<String>,

    /// Workspace root used to relativize paths (defaults to GITHUB_WORKSPACE)
    #[arg(short, long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Tool cache root (defaults to RUNNER_TOOL_CACHE)
    #[arg(long, value_name = "DIR")]
    pub tool_cache: Option<PathBuf>,

    /// Base URL of the SwiftLint release downloads
    #[arg(long, value_name = "URL")]
    pub releases_url: Option<String>,

    /// Custom configuration file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v=verbose, -vv=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Verbosity requested on the command line
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from(self.verbose)
        }
    }
}
