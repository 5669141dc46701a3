//! Cache-or-fetch of the SwiftLint installation

use log::info;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::defaults;
use crate::errors::FetchError;
use crate::models::{Arch, ToolLocation, VersionSelector};
use crate::tools::{archive, Downloader, ToolCache, ToolLocator};

/// What to do for a requested version given the cache lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// Concrete version already cached, no network access
    ReuseCached(PathBuf),

    /// Concrete version missing from the cache, fetch and store it
    FetchAndCache,

    /// "latest" sentinel, fetch into a temporary directory that is never cached
    FetchEphemeral,
}

impl FetchPlan {
    /// Decide from the version kind and the cache lookup result
    pub fn decide(version: &VersionSelector, cached: Option<PathBuf>) -> Self {
        match (version.is_latest(), cached) {
            (true, _) => FetchPlan::FetchEphemeral,
            (false, Some(dir)) => FetchPlan::ReuseCached(dir),
            (false, None) => FetchPlan::FetchAndCache,
        }
    }
}

/// A directory holding the SwiftLint executable
///
/// Ephemeral installations own their temporary directory, which is removed
/// when the installation is dropped.
#[derive(Debug)]
pub struct Installation {
    dir: PathBuf,
    staging: Option<TempDir>,
}

impl Installation {
    fn cached(dir: PathBuf) -> Self {
        Self {
            dir,
            staging: None,
        }
    }

    fn ephemeral(staging: TempDir) -> Self {
        Self {
            dir: staging.path().to_path_buf(),
            staging: Some(staging),
        }
    }

    /// Installation directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether this installation lives in the tool cache
    pub fn is_cached(&self) -> bool {
        self.staging.is_none()
    }

    /// Path of the SwiftLint executable
    pub fn executable(&self) -> PathBuf {
        self.dir.join(defaults::TOOL_BINARY)
    }
}

/// Obtains an installation, from the tool cache when possible
pub struct ToolFetcher<D, C> {
    downloader: D,
    cache: C,
    temp_dir: Option<PathBuf>,
}

impl<D, C> ToolFetcher<D, C>
where
    D: Downloader,
    C: ToolCache,
{
    /// Create a fetcher
    pub fn new(downloader: D, cache: C) -> Self {
        Self {
            downloader,
            cache,
            temp_dir: None,
        }
    }

    /// Stage downloads under `dir` instead of the system temp directory
    pub fn with_temp_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.temp_dir = dir;
        self
    }

    /// Return an installation for `location`, downloading at most once per
    /// concrete version
    pub async fn ensure(
        &self,
        location: &ToolLocation,
        arch: &Arch,
    ) -> Result<Installation, FetchError> {
        let cached = ToolLocator::find_cached(&self.cache, location, arch);

        let installation = match FetchPlan::decide(&location.version, cached) {
            FetchPlan::ReuseCached(dir) => {
                info!(
                    "Using cached SwiftLint {} from {}",
                    location.version,
                    dir.display()
                );
                Installation::cached(dir)
            }
            FetchPlan::FetchAndCache => {
                let staging = self.fetch(location).await?;
                let dir = self.cache.store(
                    staging.path(),
                    &location.tool_name,
                    location.version.as_str(),
                    arch,
                )?;
                Installation::cached(dir)
            }
            FetchPlan::FetchEphemeral => Installation::ephemeral(self.fetch(location).await?),
        };

        let executable = installation.executable();
        if !executable.is_file() {
            return Err(FetchError::MissingExecutable(executable));
        }

        Ok(installation)
    }

    /// Download and extract the archive into a fresh temporary directory
    async fn fetch(&self, location: &ToolLocation) -> Result<TempDir, FetchError> {
        info!("Downloading SwiftLint {} from {}", location.version, location.url);
        let data = self.downloader.download(&location.url).await?;

        let mut builder = tempfile::Builder::new();
        builder.prefix("swiftlint-");
        let staging = match &self.temp_dir {
            Some(dir) => builder.tempdir_in(dir)?,
            None => builder.tempdir()?,
        };

        let dest = staging.path().to_path_buf();
        tokio::task::spawn_blocking(move || archive::extract_zip(&data, &dest))
            .await
            .map_err(|e| FetchError::Archive(format!("extraction task failed: {}", e)))??;

        Ok(staging)
    }
}
