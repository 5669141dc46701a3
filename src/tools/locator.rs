//! Release asset and cache key resolution

use log::debug;
use std::path::PathBuf;

use crate::config::defaults;
use crate::errors::ConfigError;
use crate::models::{Arch, Os, Platform, ToolLocation, VersionSelector};
use crate::tools::ToolCache;

/// Maps a version and platform to a download URL and cache key
#[derive(Debug, Clone)]
pub struct ToolLocator {
    /// Base URL of the releases, without a trailing slash
    releases_url: String,
}

impl Default for ToolLocator {
    fn default() -> Self {
        Self::new(defaults::RELEASES_URL)
    }
}

impl ToolLocator {
    /// Create a locator for the given releases base URL
    pub fn new(releases_url: impl Into<String>) -> Self {
        let releases_url: String = releases_url.into();
        Self {
            releases_url: releases_url.trim_end_matches('/').to_string(),
        }
    }

    /// Release asset name for a platform.
    ///
    /// macOS gets the universal archive. Linux archives are published for
    /// x64 only.
    pub fn asset_name(platform: &Platform) -> Result<&'static str, ConfigError> {
        match (&platform.os, &platform.arch) {
            (Os::Darwin, _) => Ok(defaults::DARWIN_ASSET),
            (Os::Linux, Arch::X64) => Ok(defaults::LINUX_ASSET),
            (Os::Linux, arch) => Err(ConfigError::UnsupportedArch {
                os: platform.os.to_string(),
                arch: arch.to_string(),
            }),
            (Os::Other(name), _) => Err(ConfigError::UnsupportedOs(name.clone())),
        }
    }

    /// Cache tool name, namespaced by operating system
    pub fn tool_name(platform: &Platform) -> String {
        format!("{}-{}", defaults::TOOL_BINARY, platform.os)
    }

    /// Resolve the download URL and cache key for a version on a platform
    pub fn locate(
        &self,
        version: &VersionSelector,
        platform: &Platform,
    ) -> Result<ToolLocation, ConfigError> {
        let asset = Self::asset_name(platform)?;

        let url = match version {
            VersionSelector::Latest => {
                format!("{}/latest/download/{}.zip", self.releases_url, asset)
            }
            VersionSelector::Tag(tag) => {
                format!("{}/download/{}/{}.zip", self.releases_url, tag, asset)
            }
        };

        debug!("Resolved SwiftLint {} for {} to {}", version, platform, url);

        Ok(ToolLocation {
            url,
            tool_name: Self::tool_name(platform),
            version: version.clone(),
        })
    }

    /// Look up a previous installation for this location.
    ///
    /// The "latest" sentinel never produces a hit.
    pub fn find_cached<C>(cache: &C, location: &ToolLocation, arch: &Arch) -> Option<PathBuf>
    where
        C: ToolCache + ?Sized,
    {
        if location.version.is_latest() {
            return None;
        }

        cache.find(&location.tool_name, location.version.as_str(), arch)
    }
}
