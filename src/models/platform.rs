use std::fmt;

/// Operating system of the CI runner
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Os {
    /// macOS
    Darwin,

    /// Linux
    Linux,

    /// Anything else, named as the Rust target reports it
    Other(String),
}

impl Os {
    /// Map a `std::env::consts::OS` value to an operating system
    pub fn from_target(os: &str) -> Self {
        match os {
            "macos" | "darwin" => Os::Darwin,
            "linux" => Os::Linux,
            other => Os::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Os::Darwin => write!(f, "darwin"),
            Os::Linux => write!(f, "linux"),
            Os::Other(name) => write!(f, "{}", name),
        }
    }
}

/// CPU architecture of the CI runner
///
/// Rendered with the names the Actions tool cache uses (`x64`, `arm64`) so
/// that cache entries line up with the ones other actions create.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Arch {
    /// x86_64
    X64,

    /// aarch64
    Arm64,

    /// Anything else, named as the Rust target reports it
    Other(String),
}

impl Arch {
    /// Map a `std::env::consts::ARCH` value to an architecture
    pub fn from_target(arch: &str) -> Self {
        match arch {
            "x86_64" | "x64" => Arch::X64,
            "aarch64" | "arm64" => Arch::Arm64,
            other => Arch::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::X64 => write!(f, "x64"),
            Arch::Arm64 => write!(f, "arm64"),
            Arch::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Operating system and architecture pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    /// Operating system
    pub os: Os,

    /// CPU architecture
    pub arch: Arch,
}

impl Platform {
    /// Create a platform from its parts
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Platform this binary is running on
    pub fn current() -> Self {
        Self {
            os: Os::from_target(std::env::consts::OS),
            arch: Arch::from_target(std::env::consts::ARCH),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
