//! Locating, downloading and caching the SwiftLint binary

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::errors::FetchError;
use crate::models::Arch;

pub mod archive;
pub mod cache;
pub mod download;
pub mod fetcher;
pub mod locator;

pub use cache::DirToolCache;
pub use download::HttpDownloader;
pub use fetcher::{FetchPlan, Installation, ToolFetcher};
pub use locator::ToolLocator;

/// Fetches release archives over the network
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Download the resource at `url` and return its bytes
    async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Persistent store of extracted tools keyed by name, version and architecture
///
/// Implementations never evict entries; eviction is left to whoever owns the
/// storage.
pub trait ToolCache: Send + Sync {
    /// Directory of a complete cache entry, if one exists
    fn find(&self, tool_name: &str, version: &str, arch: &Arch) -> Option<PathBuf>;

    /// Copy `source` into the cache and return the cached directory.
    ///
    /// An existing entry for the same key is replaced.
    fn store(
        &self,
        source: &Path,
        tool_name: &str,
        version: &str,
        arch: &Arch,
    ) -> Result<PathBuf, FetchError>;
}
