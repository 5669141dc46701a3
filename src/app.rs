use log::info;
use std::path::PathBuf;

use crate::config::ActionConfig;
use crate::errors::ActionError;
use crate::models::Platform;
use crate::output::{AnnotationSink, Reporter};
use crate::runner::{self, ProcessRunner};
use crate::tools::{Downloader, ToolCache, ToolFetcher, ToolLocator};

/// Result of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// SwiftLint's exit code, to be used as the process exit code
    pub exit_code: i32,

    /// Number of annotations emitted
    pub annotations: usize,
}

/// Core application that sequences locate, fetch, run and report
pub struct ActionApp<D, C, S>
where
    D: Downloader,
    C: ToolCache,
    S: AnnotationSink,
{
    config: ActionConfig,
    platform: Platform,
    fetcher: ToolFetcher<D, C>,
    sink: S,
    cwd: PathBuf,
}

impl<D, C, S> ActionApp<D, C, S>
where
    D: Downloader,
    C: ToolCache,
    S: AnnotationSink,
{
    /// Create a new instance of ActionApp
    pub fn new(config: ActionConfig, platform: Platform, downloader: D, cache: C, sink: S) -> Self {
        let fetcher = ToolFetcher::new(downloader, cache).with_temp_dir(config.temp_dir.clone());
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            config,
            platform,
            fetcher,
            sink,
            cwd,
        }
    }

    /// Set the directory relative paths are resolved against
    pub fn with_cwd(mut self, cwd: PathBuf) -> Self {
        self.cwd = cwd;
        self
    }

    /// Consume the app and return its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Run SwiftLint and annotate its findings.
    ///
    /// Lint violations are not an error: the outcome carries SwiftLint's exit
    /// code and the caller decides how to terminate.
    pub async fn run(&mut self) -> Result<RunOutcome, ActionError> {
        let locator = ToolLocator::new(self.config.releases_url.as_str());
        let location = locator.locate(&self.config.version, &self.platform)?;
        let args = runner::build_args(self.config.strict, self.config.extra_args.as_deref())?;

        let installation = self.fetcher.ensure(&location, &self.platform.arch).await?;

        let output = ProcessRunner::new()
            .with_working_dir(self.config.workspace.clone())
            .run(&installation.executable(), &args)
            .await?;

        let reporter = Reporter::new(self.config.workspace.as_deref(), &self.cwd);
        let annotations = reporter.report(&output.stdout, &mut self.sink)?;

        info!(
            "SwiftLint exited with code {}, emitted {} annotations",
            output.exit_code, annotations
        );

        Ok(RunOutcome {
            exit_code: output.exit_code,
            annotations,
        })
    }
}
