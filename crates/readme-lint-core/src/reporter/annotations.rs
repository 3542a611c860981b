//! Line-oriented CI annotation report.

use super::Reporter;
use crate::types::{Diagnostic, Severity};

/// Renders one machine-readable workflow-command line per diagnostic:
/// `::level file=<file>,line=<n>[,col=<c>]::[<rule-id>] <message>`.
///
/// The token order and separators are consumed by CI log annotators and
/// must not change.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationsReporter;

impl AnnotationsReporter {
    /// Creates a new annotations reporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn format_annotation(diagnostic: &Diagnostic) -> String {
        let command = match diagnostic.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "notice",
        };

        let file = diagnostic.file.as_deref().unwrap_or("readme.txt");
        let line = diagnostic.line.unwrap_or(1);

        let mut properties = format!("file={file},line={line}");
        if let Some(column) = diagnostic.column {
            properties.push_str(&format!(",col={column}"));
        }

        format!(
            "::{command} {properties}::[{}] {}",
            diagnostic.rule_id, diagnostic.message
        )
    }
}

impl Reporter for AnnotationsReporter {
    fn render(&self, diagnostics: &[Diagnostic]) -> String {
        diagnostics
            .iter()
            .map(Self::format_annotation)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
