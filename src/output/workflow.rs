//! GitHub Actions workflow commands
//!
//! Annotations are written as `::warning title=..,file=..::message` lines,
//! which the runner turns into inline annotations on the pull request.

use std::io::Write;

use crate::errors::ReportError;
use crate::models::Annotation;
use crate::output::AnnotationSink;

/// Escape a command message
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Format a workflow command line, without the trailing newline
pub fn format_command(command: &str, properties: &[(&str, String)], message: &str) -> String {
    let mut line = format!("::{}", command);

    if !properties.is_empty() {
        let props: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{}={}", key, escape_property(value)))
            .collect();
        line.push(' ');
        line.push_str(&props.join(","));
    }

    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

/// Format the workflow command for an annotation
pub fn format_annotation(annotation: &Annotation) -> String {
    let mut properties = vec![("title", annotation.title.clone())];

    if let Some(file) = &annotation.file {
        properties.push(("file", file.to_string_lossy().into_owned()));
    }
    if let Some(line) = annotation.line {
        properties.push(("line", line.to_string()));
    }
    if let Some(column) = annotation.column {
        properties.push(("col", column.to_string()));
    }

    format_command(
        &annotation.level.to_string(),
        &properties,
        &annotation.message,
    )
}

/// Sink writing workflow commands to a writer, normally stdout
pub struct WorkflowCommandSink<W: Write> {
    writer: W,
}

impl WorkflowCommandSink<std::io::Stdout> {
    /// Sink on the process stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> WorkflowCommandSink<W> {
    /// Create a sink on `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: &str) -> Result<(), ReportError> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> AnnotationSink for WorkflowCommandSink<W> {
    fn annotate(&mut self, annotation: &Annotation) -> Result<(), ReportError> {
        self.write_line(&format_annotation(annotation))
    }

    fn fail(&mut self, message: &str) -> Result<(), ReportError> {
        self.write_line(&format_command("error", &[], message))
    }
}
