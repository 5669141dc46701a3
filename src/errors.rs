use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for swiftlint-annotate
#[derive(Debug, Error)]
pub enum ActionError {
    /// Configuration and environment errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Download, extraction and caching errors
    #[error("Failed to fetch SwiftLint: {0}")]
    Fetch(#[from] FetchError),

    /// SwiftLint execution errors
    #[error("Tool execution error: {0}")]
    Tool(#[from] ToolError),

    /// Output parsing and annotation errors
    #[error("Failed to report results: {0}")]
    Report(#[from] ReportError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error loading configuration file
    #[error("Failed to load config from {path}: {message}")]
    LoadError { path: PathBuf, message: String },

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The runner operating system has no SwiftLint release asset
    #[error("Unsupported OS \"{0}\", only \"darwin\" and \"linux\" are currently supported")]
    UnsupportedOs(String),

    /// The runner architecture has no SwiftLint release asset for this OS
    #[error("Unsupported architecture \"{arch}\" on \"{os}\", only \"x64\" is currently supported")]
    UnsupportedArch { os: String, arch: String },

    /// Extra arguments could not be split into words
    #[error("Invalid extra arguments {0:?}: unbalanced quotes or trailing escape")]
    InvalidArgs(String),

    /// No directory is available to hold the tool cache
    #[error("No tool cache directory available, set RUNNER_TOOL_CACHE or pass --tool-cache")]
    NoToolCache,
}

/// Download, extraction and tool cache errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request could not be completed
    #[error("Failed to download {url}: {message}")]
    Http { url: String, message: String },

    /// The server answered with a non-success status
    #[error("Failed to download {url} (HTTP {status})")]
    Status { url: String, status: u16 },

    /// The archive could not be read or unpacked
    #[error("Invalid archive: {0}")]
    Archive(String),

    /// The archive did not contain the expected executable
    #[error("Executable not found at {0}")]
    MissingExecutable(PathBuf),

    /// The extracted tool could not be stored in the tool cache
    #[error("Failed to cache tool in {path}: {message}")]
    Cache { path: PathBuf, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Tool execution errors
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool could not be started
    #[error("Failed to execute tool '{name}': {message}")]
    ExecutionFailed { name: String, message: String },

    /// Tool was terminated without an exit code
    #[error("Tool '{name}' was terminated by a signal")]
    Terminated { name: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result reporting errors
#[derive(Debug, Error)]
pub enum ReportError {
    /// The tool output is not a list of diagnostic records
    #[error("Failed to parse SwiftLint output: {0}")]
    Parse(#[from] serde_json::Error),

    /// The annotation could not be written
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
