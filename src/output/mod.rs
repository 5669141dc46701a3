//! Translation of SwiftLint findings into CI annotations

use log::debug;
use std::path::{Path, PathBuf};

use crate::errors::ReportError;
use crate::models::{Annotation, AnnotationLevel, DiagnosticRecord};
use crate::utils;

pub mod workflow;

pub use workflow::WorkflowCommandSink;

/// Destination for annotations and the run-failure signal
pub trait AnnotationSink {
    /// Emit one annotation
    fn annotate(&mut self, annotation: &Annotation) -> Result<(), ReportError>;

    /// Signal that the run failed
    fn fail(&mut self, message: &str) -> Result<(), ReportError>;
}

/// Sink that keeps everything in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Annotations in emission order
    pub annotations: Vec<Annotation>,

    /// Failure messages in emission order
    pub failures: Vec<String>,
}

impl RecordingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnnotationSink for RecordingSink {
    fn annotate(&mut self, annotation: &Annotation) -> Result<(), ReportError> {
        self.annotations.push(annotation.clone());
        Ok(())
    }

    fn fail(&mut self, message: &str) -> Result<(), ReportError> {
        self.failures.push(message.to_string());
        Ok(())
    }
}

impl<S: AnnotationSink + ?Sized> AnnotationSink for &mut S {
    fn annotate(&mut self, annotation: &Annotation) -> Result<(), ReportError> {
        (**self).annotate(annotation)
    }

    fn fail(&mut self, message: &str) -> Result<(), ReportError> {
        (**self).fail(message)
    }
}

/// Parse SwiftLint JSON reporter output
pub fn parse_records(stdout: &str) -> Result<Vec<DiagnosticRecord>, ReportError> {
    Ok(serde_json::from_str(stdout)?)
}

/// Maps diagnostic records to annotations, one for one
#[derive(Debug, Clone)]
pub struct Reporter {
    /// Directory file paths are made relative to
    root: PathBuf,

    /// Directory relative record paths are resolved against
    cwd: PathBuf,
}

impl Reporter {
    /// Create a reporter relativizing against `workspace`, or `cwd` when no
    /// workspace is configured
    pub fn new(workspace: Option<&Path>, cwd: &Path) -> Self {
        Self {
            root: workspace.unwrap_or(cwd).to_path_buf(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// Build the annotation for one record
    pub fn annotation(&self, record: &DiagnosticRecord) -> Annotation {
        Annotation {
            level: AnnotationLevel::from_severity(&record.severity),
            message: record.reason.clone(),
            title: format!("{} ({})", record.kind, record.rule_id),
            file: record
                .file
                .as_deref()
                .map(|file| utils::relativize(Path::new(file), &self.root, &self.cwd)),
            line: record.line,
            column: record.character,
        }
    }

    /// Parse `stdout` and emit one annotation per record, in order.
    ///
    /// Nothing is emitted unless the whole output parses. Returns the number
    /// of annotations emitted.
    pub fn report<S>(&self, stdout: &str, sink: &mut S) -> Result<usize, ReportError>
    where
        S: AnnotationSink + ?Sized,
    {
        let records = parse_records(stdout)?;
        debug!("Parsed {} diagnostic records", records.len());

        for record in &records {
            sink.annotate(&self.annotation(record))?;
        }

        Ok(records.len())
    }
}
