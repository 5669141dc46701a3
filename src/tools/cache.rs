//! On-disk tool cache compatible with the Actions runner layout
//!
//! Entries live in `<root>/<tool>/<version>/<arch>` and are only considered
//! complete once the sibling marker `<arch>.complete` exists, so an
//! interrupted copy is never picked up as a hit.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::FetchError;
use crate::models::Arch;
use crate::tools::ToolCache;
use crate::utils;

/// Tool cache rooted at a directory
#[derive(Debug, Clone)]
pub struct DirToolCache {
    root: PathBuf,
}

impl DirToolCache {
    /// Create a cache rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding an entry
    pub fn entry_dir(&self, tool_name: &str, version: &str, arch: &Arch) -> PathBuf {
        self.root
            .join(tool_name)
            .join(version)
            .join(arch.to_string())
    }

    fn marker(&self, tool_name: &str, version: &str, arch: &Arch) -> PathBuf {
        self.root
            .join(tool_name)
            .join(version)
            .join(format!("{}.complete", arch))
    }
}

impl ToolCache for DirToolCache {
    fn find(&self, tool_name: &str, version: &str, arch: &Arch) -> Option<PathBuf> {
        if version.is_empty() {
            return None;
        }

        let dir = self.entry_dir(tool_name, version, arch);
        let found = dir.is_dir() && self.marker(tool_name, version, arch).is_file();
        debug!("Tool cache lookup {} -> {}", dir.display(), found);

        found.then_some(dir)
    }

    fn store(
        &self,
        source: &Path,
        tool_name: &str,
        version: &str,
        arch: &Arch,
    ) -> Result<PathBuf, FetchError> {
        let dest = self.entry_dir(tool_name, version, arch);
        let marker = self.marker(tool_name, version, arch);
        let cache_err = |e: std::io::Error| FetchError::Cache {
            path: dest.clone(),
            message: e.to_string(),
        };

        if marker.exists() {
            fs::remove_file(&marker).map_err(cache_err)?;
        }
        if dest.exists() {
            fs::remove_dir_all(&dest).map_err(cache_err)?;
        }

        utils::copy_dir_all(source, &dest).map_err(cache_err)?;
        fs::write(&marker, b"").map_err(cache_err)?;

        info!("Cached {} {} in {}", tool_name, version, dest.display());
        Ok(dest)
    }
}
