//! Configuration management for swiftlint-annotate
//!
//! Settings are layered: command-line flags win over GitHub Actions inputs,
//! which win over the project file, which wins over built-in defaults.

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::errors::ConfigError;
use crate::models::VersionSelector;

pub mod defaults;
pub mod inputs;

pub use inputs::ActionInputs;

/// Configuration provider trait
pub trait ConfigProvider {
    /// Load the project configuration for the given directory
    fn load_config(&self, base_dir: &Path) -> Result<FileConfig, ConfigError>;
}

/// Contents of `.swiftlint-annotate.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// SwiftLint version to run
    pub version: Option<VersionSelector>,

    /// Pass `--strict` to SwiftLint
    pub strict: Option<bool>,

    /// Extra arguments for SwiftLint, split with shell rules
    pub args: Option<String>,

    /// Tool cache root
    pub tool_cache: Option<PathBuf>,

    /// Base URL of the release downloads
    pub releases_url: Option<String>,
}

/// Facts about the runner read from its environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerEnv {
    /// `GITHUB_WORKSPACE`
    pub workspace: Option<PathBuf>,

    /// `RUNNER_TOOL_CACHE`
    pub tool_cache: Option<PathBuf>,

    /// `RUNNER_TEMP`
    pub temp: Option<PathBuf>,
}

impl RunnerEnv {
    /// Read the runner environment of this process
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the runner environment through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        Self {
            workspace: path("GITHUB_WORKSPACE"),
            tool_cache: path("RUNNER_TOOL_CACHE"),
            temp: path("RUNNER_TEMP"),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    /// SwiftLint version to run
    pub version: VersionSelector,

    /// Pass `--strict` to SwiftLint
    pub strict: bool,

    /// Extra arguments, still unsplit
    pub extra_args: Option<String>,

    /// Workspace root, used to relativize paths and as the working directory
    pub workspace: Option<PathBuf>,

    /// Tool cache root
    pub tool_cache: PathBuf,

    /// Parent directory for downloads and extraction
    pub temp_dir: Option<PathBuf>,

    /// Base URL of the release downloads
    pub releases_url: String,
}

impl ActionConfig {
    /// Merge every configuration layer into the settings for this run
    pub fn resolve(
        cli: &Cli,
        inputs: &ActionInputs,
        file: &FileConfig,
        env: &RunnerEnv,
    ) -> Result<Self, ConfigError> {
        let version = cli
            .swiftlint_version
            .as_deref()
            .or(inputs.version.as_deref())
            .map(VersionSelector::parse)
            .or_else(|| file.version.clone())
            .unwrap_or_default();

        let strict = cli.strict || inputs.strict.or(file.strict).unwrap_or(false);

        let extra_args = cli
            .args
            .clone()
            .or_else(|| inputs.args.clone())
            .or_else(|| file.args.clone());

        let workspace = cli.workspace.clone().or_else(|| env.workspace.clone());

        let tool_cache = cli
            .tool_cache
            .clone()
            .or_else(|| env.tool_cache.clone())
            .or_else(|| file.tool_cache.clone())
            .or_else(|| {
                dirs::cache_dir().map(|dir| dir.join(defaults::CACHE_DIR_NAME).join("tool-cache"))
            })
            .ok_or(ConfigError::NoToolCache)?;

        let releases_url = cli
            .releases_url
            .clone()
            .or_else(|| file.releases_url.clone())
            .unwrap_or_else(|| defaults::RELEASES_URL.to_string());

        Ok(Self {
            version,
            strict,
            extra_args,
            workspace,
            tool_cache,
            temp_dir: env.temp.clone(),
            releases_url: releases_url.trim_end_matches('/').to_string(),
        })
    }
}

/// TOML configuration provider
#[derive(Debug, Default)]
pub struct TomlConfigProvider {
    /// Explicit configuration file, skips the directory search
    config_path: Option<PathBuf>,
}

impl TomlConfigProvider {
    /// Create a provider that searches upwards for the project file
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Use an explicit configuration file
    pub fn with_config_file(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Find the project file by traversing the directory tree upwards
    fn find_project_config(&self, base_dir: &Path) -> Option<PathBuf> {
        base_dir
            .ancestors()
            .map(|dir| dir.join(defaults::CONFIG_FILE_NAME))
            .find(|path| path.is_file())
    }

    /// Read configuration from a file
    fn read_config_file(&self, path: &Path) -> Result<FileConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(toml::from_str(&content)?)
    }
}

impl ConfigProvider for TomlConfigProvider {
    fn load_config(&self, base_dir: &Path) -> Result<FileConfig, ConfigError> {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => match self.find_project_config(base_dir) {
                Some(path) => path,
                None => return Ok(FileConfig::default()),
            },
        };

        debug!("Loading config from {}", path.display());
        self.read_config_file(&path)
    }
}
