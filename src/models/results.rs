use serde::Deserialize;
use std::path::PathBuf;
use strum_macros::{Display, EnumString};

/// One finding from the SwiftLint JSON reporter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiagnosticRecord {
    /// File the finding belongs to
    #[serde(default)]
    pub file: Option<String>,

    /// Line number (1-indexed)
    #[serde(default)]
    pub line: Option<u64>,

    /// Column number (1-indexed)
    #[serde(default)]
    pub character: Option<u64>,

    /// Severity as reported, compared case-insensitively
    pub severity: String,

    /// Human-readable rule name
    #[serde(rename = "type")]
    pub kind: String,

    /// Rule identifier
    pub rule_id: String,

    /// Description of the violation
    pub reason: String,
}

/// Annotation channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AnnotationLevel {
    /// Rendered as a warning, does not fail the job on its own
    Warning,

    /// Rendered as an error
    Error,
}

impl AnnotationLevel {
    /// Pick the channel for a reported severity.
    ///
    /// Only `warning` (in any case) maps to [`AnnotationLevel::Warning`];
    /// `error` and anything unrecognized map to [`AnnotationLevel::Error`].
    pub fn from_severity(severity: &str) -> Self {
        if severity.eq_ignore_ascii_case("warning") {
            AnnotationLevel::Warning
        } else {
            AnnotationLevel::Error
        }
    }
}

/// An inline CI annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Channel
    pub level: AnnotationLevel,

    /// Annotation body
    pub message: String,

    /// Annotation title
    pub title: String,

    /// File relative to the workspace root
    pub file: Option<PathBuf>,

    /// Start line
    pub line: Option<u64>,

    /// Start column
    pub column: Option<u64>,
}
