//! Built-in defaults

/// Base URL of the SwiftLint GitHub releases
pub const RELEASES_URL: &str = "https://github.com/realm/SwiftLint/releases";

/// Name of the executable inside every release archive
pub const TOOL_BINARY: &str = "swiftlint";

/// Release asset for macOS, a universal binary
pub const DARWIN_ASSET: &str = "portable_swiftlint";

/// Release asset for Linux, x86_64 only
pub const LINUX_ASSET: &str = "swiftlint_linux";

/// Project-level configuration file name
pub const CONFIG_FILE_NAME: &str = ".swiftlint-annotate.toml";

/// Directory under the user cache dir used when no runner tool cache exists
pub const CACHE_DIR_NAME: &str = "swiftlint-annotate";
