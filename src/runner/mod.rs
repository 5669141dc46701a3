//! SwiftLint process execution

use log::debug;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use crate::config::defaults;
use crate::errors::{ConfigError, ToolError};
use crate::utils;

/// Arguments that select linting with the JSON reporter
pub const BASE_ARGS: [&str; 2] = ["lint", "--reporter=json"];

/// Output of a finished SwiftLint process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// Everything the process wrote to stdout
    pub stdout: String,

    /// Process exit code
    pub exit_code: i32,
}

/// Build the SwiftLint argument list.
///
/// `extra_args` is split with shell word rules, so quoted values containing
/// spaces stay a single argument.
pub fn build_args(strict: bool, extra_args: Option<&str>) -> Result<Vec<String>, ConfigError> {
    let mut args: Vec<String> = BASE_ARGS.iter().map(|s| s.to_string()).collect();

    if strict {
        args.push("--strict".to_string());
    }

    if let Some(extra) = extra_args {
        let words = shlex::split(extra).ok_or_else(|| ConfigError::InvalidArgs(extra.to_string()))?;
        args.extend(words);
    }

    Ok(args)
}

/// Runs SwiftLint and captures its output
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    /// Working directory for the process
    working_dir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Create a runner that inherits the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the process in `dir`
    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    /// Run `executable` with `args` and wait for it to finish.
    ///
    /// A non-zero exit code is returned as-is, SwiftLint uses it to report
    /// violations. Stderr is passed through to the job log.
    pub async fn run(&self, executable: &Path, args: &[String]) -> Result<RunOutput, ToolError> {
        let mut command = Command::new(executable);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        utils::log_command(command.as_std());

        let output = command
            .output()
            .await
            .map_err(|e| ToolError::ExecutionFailed {
                name: defaults::TOOL_BINARY.to_string(),
                message: e.to_string(),
            })?;

        let exit_code = output.status.code().ok_or_else(|| ToolError::Terminated {
            name: defaults::TOOL_BINARY.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(
            "{} exited with code {} after writing {} bytes",
            defaults::TOOL_BINARY,
            exit_code,
            stdout.len()
        );

        Ok(RunOutput { stdout, exit_code })
    }
}
