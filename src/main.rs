use std::process::ExitCode;

use clap::Parser;
use log::error;

use swiftlint_annotate::app::{ActionApp, RunOutcome};
use swiftlint_annotate::cli::{Cli, Verbosity};
use swiftlint_annotate::config::{
    ActionConfig, ActionInputs, ConfigProvider, RunnerEnv, TomlConfigProvider,
};
use swiftlint_annotate::errors::ActionError;
use swiftlint_annotate::models::Platform;
use swiftlint_annotate::output::{AnnotationSink, WorkflowCommandSink};
use swiftlint_annotate::tools::{DirToolCache, HttpDownloader};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logger(cli.verbosity());

    let mut sink = WorkflowCommandSink::stdout();

    match run(cli, &mut sink).await {
        Ok(outcome) => u8::try_from(outcome.exit_code)
            .map(ExitCode::from)
            .unwrap_or(ExitCode::FAILURE),
        Err(err) => {
            error!("{}", err);
            if let Err(report_err) = sink.fail(&err.to_string()) {
                error!("Failed to report failure: {}", report_err);
            }
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging on stderr so it never mixes with workflow commands
fn init_logger(verbosity: Verbosity) {
    let mut level = verbosity.level_filter();

    // The runner sets RUNNER_DEBUG when step debug logging is enabled
    if std::env::var("RUNNER_DEBUG").as_deref() == Ok("1") {
        level = level.max(log::LevelFilter::Debug);
    }

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

async fn run(
    cli: Cli,
    sink: &mut WorkflowCommandSink<std::io::Stdout>,
) -> Result<RunOutcome, ActionError> {
    let cwd = std::env::current_dir()?;
    let env = RunnerEnv::from_env();
    let inputs = ActionInputs::from_env();

    let base_dir = cli
        .workspace
        .clone()
        .or_else(|| env.workspace.clone())
        .unwrap_or_else(|| cwd.clone());

    let provider = match &cli.config {
        Some(path) => TomlConfigProvider::new().with_config_file(path.clone()),
        None => TomlConfigProvider::new(),
    };
    let file_config = provider.load_config(&base_dir)?;

    let config = ActionConfig::resolve(&cli, &inputs, &file_config, &env)?;
    let cache = DirToolCache::new(config.tool_cache.clone());
    let downloader = HttpDownloader::new()?;

    let mut app =
        ActionApp::new(config, Platform::current(), downloader, cache, sink).with_cwd(cwd);
    app.run().await
}
