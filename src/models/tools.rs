use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel version that always resolves to the newest release
pub const LATEST: &str = "latest";

/// Which SwiftLint release to run
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VersionSelector {
    /// Newest published release, fetched on every run and never cached
    #[default]
    Latest,

    /// A concrete release tag such as `0.57.0`
    Tag(String),
}

impl VersionSelector {
    /// Parse a version input, treating blank input as the sentinel
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input == LATEST {
            VersionSelector::Latest
        } else {
            VersionSelector::Tag(input.to_string())
        }
    }

    /// Whether this is the "latest" sentinel
    pub fn is_latest(&self) -> bool {
        matches!(self, VersionSelector::Latest)
    }

    /// The string used in URLs and cache keys
    pub fn as_str(&self) -> &str {
        match self {
            VersionSelector::Latest => LATEST,
            VersionSelector::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for VersionSelector {
    fn from(value: String) -> Self {
        VersionSelector::parse(&value)
    }
}

impl From<VersionSelector> for String {
    fn from(value: VersionSelector) -> Self {
        value.as_str().to_string()
    }
}

/// Where to download a SwiftLint release and how to key it in the tool cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolLocation {
    /// Release asset URL
    pub url: String,

    /// Tool name in the cache, including the OS discriminator
    pub tool_name: String,

    /// Requested version
    pub version: VersionSelector,
}
